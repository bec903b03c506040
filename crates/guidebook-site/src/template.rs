//! Page templates and placeholder substitution.
//!
//! Templates are plain strings containing `{{ name }}` placeholder
//! tokens. The recognized placeholder set is `body`, `title`,
//! `description`, and `next_guide`; any template may use a subset.
//!
//! Substitution is deliberately dumb: placeholders without a matching
//! substitution pass through unchanged, and substitution keys without a
//! matching placeholder are ignored. Optional fields like the
//! description can therefore be omitted without special cases.

/// Template for standalone posts.
///
/// Jekyll front matter plus the markdown-body wrapper. MathJax is
/// loaded because several posts contain TeX math.
pub const POST_TEMPLATE: &str = r#"---
layout: default
---
<link rel="stylesheet" type="text/css" href="/css/github-markdown.css" />

<style>
    .markdown-body {
        box-sizing: border-box;
        min-width: 200px;
        max-width: 980px;
        margin: 0 auto;
        padding: 45px;
    }

    .next-guide {
        text-align: center;
        font-weight: bold;
    }

    img {
        display: block;
        margin: 0 auto;
    }
</style>

<script type="text/javascript" async
  src="https://cdn.mathjax.org/mathjax/latest/MathJax.js?config=TeX-MML-AM_CHTML">
</script>

<div class="markdown-body">{{ body }}</div>
"#;

/// Template for guide pages: the post layout plus title/description
/// front matter and the "next section" footer.
pub const GUIDE_TEMPLATE: &str = r#"---
layout: default
title: {{ title }}
description: {{ description }}
---
<link rel="stylesheet" type="text/css" href="/css/github-markdown.css" />

<style>
    .markdown-body {
        box-sizing: border-box;
        min-width: 200px;
        max-width: 980px;
        margin: 0 auto;
        padding: 45px;
    }

    .next-guide {
        text-align: center;
        font-weight: bold;
    }

    img {
        display: block;
        margin: 0 auto;
    }
</style>

<script type="text/javascript" async
  src="https://cdn.mathjax.org/mathjax/latest/MathJax.js?config=TeX-MML-AM_CHTML">
</script>

<div class="markdown-body">{{ body }}</div>

<div class="next-guide">{{ next_guide }}</div>
"#;

/// Template for the guide index page listing all sections in order.
pub const INDEX_TEMPLATE: &str = r#"---
layout: default
title: {{ title }}
---
<p>{{ description }}</p>
<ol>{{ body }}</ol>
"#;

/// Replace every `{{ key }}` placeholder with its substitution value.
///
/// Placeholders not present in `substitutions` are left unreplaced;
/// keys that match no placeholder are silently ignored. Calling
/// `render` again with the same map never removes literal template
/// text, so partial substitution is safe to repeat.
#[must_use]
pub fn render(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut output = template.to_owned();
    for (key, value) in substitutions {
        let placeholder = format!("{{{{ {key} }}}}");
        output = output.replace(&placeholder, value);
    }
    output
}
