use crate::models::presets::StylePreset;

/// Fixed directive appended when the user asks to strip branding artifacts.
pub const STRIP_BRANDING_DIRECTIVE: &str = "no text, no watermarks, no logos";

/// Merge the free-text prompt with the optional style fragment and the
/// branding-strip directive. Fragment order is fixed: base, style, directive.
/// The base text is passed through verbatim; callers reject empty prompts
/// before composing.
pub fn compose(base_prompt: &str, style: Option<&StylePreset>, strip_branding: bool) -> String {
    debug_assert!(!base_prompt.trim().is_empty());

    let mut prompt = base_prompt.to_string();

    if let Some(style) = style {
        if !style.is_none() {
            prompt.push_str(", ");
            prompt.push_str(style.value);
        }
    }

    if strip_branding {
        prompt.push_str(", ");
        prompt.push_str(STRIP_BRANDING_DIRECTIVE);
    }

    prompt
}
