//! Fixed content strategist prompt.
//!
//! The template is constant across calls except for one substitution point,
//! [`TOPIC_PLACEHOLDER`]. The topic is inserted verbatim: no escaping, no
//! trimming, no length bound.

/// Marker replaced by the caller-supplied topic. Appears exactly once in
/// [`OUTLINE_PROMPT_TEMPLATE`].
pub const TOPIC_PLACEHOLDER: &str = "{{topic}}";

/// Instructions sent to the backend for every outline request.
pub const OUTLINE_PROMPT_TEMPLATE: &str = "\
You are an experienced content strategist. Your job is to turn a topic into a \
clear, well-organized outline that a writer can use to draft a long-form article.

## Topic
{{topic}}

## Instructions
1. Identify the main themes a reader would expect this article to cover.
2. Order the themes so the article flows from fundamentals to advanced material.
3. Break each theme into focused sub-points, and add supporting details where useful.
4. Open with an introduction and close with a conclusion or call to action.

## Format
- Use Roman numerals (I, II, III, ...) for top-level sections.
- Use capital letters (A, B, C, ...) for sub-points within a section.
- Use bullets (-) for supporting details under a sub-point.
- Keep every entry to a single concise line.
- Return only the outline, with no preamble or closing remarks.

## Example structure
I. Introduction
   A. Hook that frames why the subject matters
   B. Thesis statement
II. Core Concept
   A. Definition and background
      - Key term or fact
      - Common misconception
   B. Why it matters today
III. Practical Application
   A. Step-by-step approach
   B. Real-world example
IV. Conclusion
   A. Summary of key takeaways
   B. Call to action
";

/// Build the backend prompt for `topic`.
///
/// The returned string is the template with its single placeholder replaced by
/// `topic`, byte for byte.
pub fn build_outline_prompt(topic: &str) -> String {
    OUTLINE_PROMPT_TEMPLATE.replacen(TOPIC_PLACEHOLDER, topic, 1)
}
