// ===== SAMPLE TEXT PRESETS =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextPreset {
    pub title: &'static str,
    pub heading_text: &'static str,
    pub body_text: &'static str,
}

pub static TEXT_PRESETS: [TextPreset; 2] = [
    TextPreset {
        title: "サービス紹介",
        heading_text: "デザインの力で、ビジネスを加速させる。",
        body_text: "私たちは、ユーザー体験を第一に考えたUI/UXデザインを提供します。最新の技術と深い洞察に基づき、あなたのビジネスが直面する課題を解決へと導きます。まずは気軽にご相談ください。",
    },
    TextPreset {
        title: "ニュース記事",
        heading_text: "最新のAIデザインツール、現場への導入が加速",
        body_text: "近年、AIを活用したデザイン制作が急速に普及しています。特にプロトタイピングの高速化において、従来のワークフローを大幅に改善する事例が増えており、多くのデザイナーがその恩恵を受けています。",
    },
];

pub fn preset_by_title(title: &str) -> Option<&'static TextPreset> {
    TEXT_PRESETS.iter().find(|preset| preset.title == title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_are_unique_and_resolvable() {
        assert_ne!(TEXT_PRESETS[0].title, TEXT_PRESETS[1].title);
        for preset in &TEXT_PRESETS {
            assert_eq!(preset_by_title(preset.title), Some(preset));
        }
        assert_eq!(preset_by_title("ブログ"), None);
    }
}
