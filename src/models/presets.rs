use serde::Serialize;

/// A named prompt fragment that biases the visual style of the output.
/// `value` is both the selection key and the fragment appended to the prompt;
/// the "None" sentinel carries the value `"none"` and contributes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StylePreset {
    pub label: &'static str,
    pub value: &'static str,
}

impl StylePreset {
    pub fn is_none(&self) -> bool {
        self.value == "none"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizePreset {
    pub label: &'static str,
    pub value: &'static str,
    pub width: u32,
    pub height: u32,
}

const STYLE_PRESETS: &[StylePreset] = &[
    StylePreset { label: "None", value: "none" },
    StylePreset { label: "Photorealistic", value: "photorealistic, 8k, highly detailed, professional photography" },
    StylePreset { label: "Oil Painting", value: "oil painting, classical art style, rich colors, textured brushstrokes" },
    StylePreset { label: "Watercolor", value: "watercolor painting, soft colors, flowing, artistic" },
    StylePreset { label: "Digital Art", value: "digital art, vibrant colors, modern, detailed" },
    StylePreset { label: "Anime", value: "anime style, manga, japanese animation" },
    StylePreset { label: "Pop Art", value: "pop art style, bold colors, comic book, Andy Warhol inspired" },
    StylePreset { label: "Pencil Sketch", value: "pencil sketch, hand-drawn, black and white, artistic" },
    StylePreset { label: "Charcoal Drawing", value: "charcoal drawing, dramatic contrast, expressive strokes, fine art" },
    StylePreset { label: "Ink Drawing", value: "ink drawing, pen and ink, detailed linework, black and white" },
    StylePreset { label: "Crayon Art", value: "crayon drawing, textured, colorful, hand-drawn aesthetic" },
    StylePreset { label: "Cross Hatch", value: "cross hatching technique, detailed shading, pen illustration" },
    StylePreset { label: "Lithograph", value: "lithograph print, vintage printing technique, fine art reproduction" },
    StylePreset { label: "Etching", value: "etching style, engraved, intricate detail, traditional printmaking" },
    StylePreset { label: "Poster Art", value: "vintage poster art, bold graphics, screen print style" },
    StylePreset { label: "Linocut", value: "linocut print, bold shapes, high contrast, block printing" },
    StylePreset { label: "3D Render", value: "3d render, octane render, cinematic lighting, high quality" },
    StylePreset { label: "Pixel Art", value: "pixel art, 8-bit, retro gaming style" },
];

const SIZE_PRESETS: &[SizePreset] = &[
    SizePreset { label: "Square (1024x1024)", value: "square", width: 1024, height: 1024 },
    SizePreset { label: "Portrait (1024x1536)", value: "portrait", width: 1024, height: 1536 },
    SizePreset { label: "Landscape (1536x1024)", value: "landscape", width: 1536, height: 1024 },
];

/// Style catalog in display order.
pub fn style_presets() -> &'static [StylePreset] {
    STYLE_PRESETS
}

/// Size catalog in display order.
pub fn size_presets() -> &'static [SizePreset] {
    SIZE_PRESETS
}

pub fn find_style(value: &str) -> Option<&'static StylePreset> {
    STYLE_PRESETS.iter().find(|preset| preset.value == value)
}

pub fn find_size(value: &str) -> Option<&'static SizePreset> {
    SIZE_PRESETS.iter().find(|preset| preset.value == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_leads_the_style_catalog() {
        let styles = style_presets();
        assert_eq!(styles.len(), 18);
        assert!(styles[0].is_none());
        assert_eq!(styles[0].label, "None");
        assert!(!styles[1].is_none());
    }

    #[test]
    fn test_find_style_by_value() {
        let anime = find_style("anime style, manga, japanese animation").unwrap();
        assert_eq!(anime.label, "Anime");
        assert!(find_style("vaporwave").is_none());
    }

    #[test]
    fn test_size_catalog() {
        let sizes = size_presets();
        assert_eq!(sizes.len(), 3);
        assert_eq!(sizes[0].value, "square");

        let portrait = find_size("portrait").unwrap();
        assert_eq!((portrait.width, portrait.height), (1024, 1536));
    }
}
