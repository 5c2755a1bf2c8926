//! Inline recognizers for technical syntax
//!
//! Patterns run in [`InlinePattern::ORDER`]. Every pass sees the output of
//! the previous one, so spans captured earlier appear only as placeholder
//! tokens. Attribute-list shorthand must run before generic attribute pairs,
//! otherwise `{: key="v"}` would be split by the pair pattern.

use regex::Regex;
use std::sync::LazyLock;

static CODE_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`[^`]+`").unwrap());

static TEMPLATE_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{%.*?%\}").unwrap());

static TEMPLATE_OUTPUT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{.*?\}\}").unwrap());

static ATTRIBUTE_LIST: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{:[^}]*\}").unwrap());

static ATTRIBUTE_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\w:.-]+=(?:"[^"]*"|'[^']*')"#).unwrap());

// Target and title run to the matching closing paren whatever quotes they
// contain. One level of nested parens is allowed inside the target.
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!?\[[^\]]*\]\((?:[^()]|\([^()]*\))*\)").unwrap());

/// A kind of inline span whose quotes are syntax, not prose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlinePattern {
    /// `` `code` ``
    CodeSpan,
    /// `{% tag %}`
    TemplateDirective,
    /// `{{ expression }}`
    TemplateOutput,
    /// `{: .class key="value"}`
    AttributeList,
    /// `key="value"` or `key='value'`
    AttributePair,
    /// `[label](target "title")`, also images
    Link,
}

impl InlinePattern {
    /// Protection order within a line
    pub const ORDER: [InlinePattern; 6] = [
        InlinePattern::CodeSpan,
        InlinePattern::TemplateDirective,
        InlinePattern::TemplateOutput,
        InlinePattern::AttributeList,
        InlinePattern::AttributePair,
        InlinePattern::Link,
    ];

    pub fn regex(&self) -> &'static Regex {
        match self {
            InlinePattern::CodeSpan => &*CODE_SPAN,
            InlinePattern::TemplateDirective => &*TEMPLATE_DIRECTIVE,
            InlinePattern::TemplateOutput => &*TEMPLATE_OUTPUT,
            InlinePattern::AttributeList => &*ATTRIBUTE_LIST,
            InlinePattern::AttributePair => &*ATTRIBUTE_PAIR,
            InlinePattern::Link => &*LINK,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            InlinePattern::CodeSpan => "code span",
            InlinePattern::TemplateDirective => "template directive",
            InlinePattern::TemplateOutput => "template output",
            InlinePattern::AttributeList => "attribute list",
            InlinePattern::AttributePair => "attribute pair",
            InlinePattern::Link => "link",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(pattern: InlinePattern, text: &str) -> Vec<&str> {
        pattern
            .regex()
            .find_iter(text)
            .map(|m| m.as_str())
            .collect()
    }

    #[test]
    fn test_code_span() {
        assert_eq!(
            matches(InlinePattern::CodeSpan, r#"run `echo "hi"` and `ls`"#),
            vec![r#"`echo "hi"`"#, "`ls`"]
        );
    }

    #[test]
    fn test_template_directive_is_lazy() {
        assert_eq!(
            matches(
                InlinePattern::TemplateDirective,
                r#"{% include "a.html" %} text {% endif %}"#
            ),
            vec![r#"{% include "a.html" %}"#, "{% endif %}"]
        );
    }

    #[test]
    fn test_template_output() {
        assert_eq!(
            matches(InlinePattern::TemplateOutput, r#"Hi {{ name | default: "x" }}!"#),
            vec![r#"{{ name | default: "x" }}"#]
        );
    }

    #[test]
    fn test_attribute_list() {
        assert_eq!(
            matches(InlinePattern::AttributeList, r#"Title {: .note title="A"}"#),
            vec![r#"{: .note title="A"}"#]
        );
    }

    #[test]
    fn test_attribute_pair_both_quote_kinds() {
        assert_eq!(
            matches(
                InlinePattern::AttributePair,
                r#"<a href="x.html" data-id='7'>"#
            ),
            vec![r#"href="x.html""#, "data-id='7'"]
        );
    }

    #[test]
    fn test_attribute_pair_needs_equals() {
        assert!(matches(InlinePattern::AttributePair, r#"He said "hello""#).is_empty());
    }

    #[test]
    fn test_link_with_title() {
        assert_eq!(
            matches(InlinePattern::Link, r#"see [test](https://example.com "title") now"#),
            vec![r#"[test](https://example.com "title")"#]
        );
    }

    #[test]
    fn test_link_target_with_balanced_parens() {
        let text = r#"Die [Seite](https://de.wikipedia.org/wiki/Rust_(Programmiersprache) "Titel") ist gut."#;
        assert_eq!(
            matches(InlinePattern::Link, text),
            vec![r#"[Seite](https://de.wikipedia.org/wiki/Rust_(Programmiersprache) "Titel")"#]
        );
    }

    #[test]
    fn test_link_ends_at_matching_paren() {
        assert_eq!(
            matches(InlinePattern::Link, r#"([a](b) "c")"#),
            vec!["[a](b)"]
        );
    }

    #[test]
    fn test_image_link() {
        assert_eq!(
            matches(InlinePattern::Link, r#"![alt](img.png 'Pic')"#),
            vec![r#"![alt](img.png 'Pic')"#]
        );
    }

    #[test]
    fn test_order_puts_attribute_list_before_pairs() {
        let list = InlinePattern::ORDER
            .iter()
            .position(|p| *p == InlinePattern::AttributeList)
            .unwrap();
        let pair = InlinePattern::ORDER
            .iter()
            .position(|p| *p == InlinePattern::AttributePair)
            .unwrap();
        assert!(list < pair);
        assert_eq!(InlinePattern::ORDER[0], InlinePattern::CodeSpan);
        assert_eq!(InlinePattern::ORDER[5], InlinePattern::Link);
    }
}
