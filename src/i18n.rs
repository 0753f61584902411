use serde::{Deserialize, Serialize};

/// 提案文档的目标语言
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum TargetLanguage {
    #[serde(rename = "en")]
    #[default]
    English,
    #[serde(rename = "zh")]
    Chinese,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "fr")]
    French,
}

impl std::fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetLanguage::English => write!(f, "en"),
            TargetLanguage::Chinese => write!(f, "zh"),
            TargetLanguage::Japanese => write!(f, "ja"),
            TargetLanguage::German => write!(f, "de"),
            TargetLanguage::French => write!(f, "fr"),
        }
    }
}

impl std::str::FromStr for TargetLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(TargetLanguage::English),
            "zh" | "chinese" | "中文" => Ok(TargetLanguage::Chinese),
            "ja" | "japanese" | "日本語" => Ok(TargetLanguage::Japanese),
            "de" | "german" | "deutsch" => Ok(TargetLanguage::German),
            "fr" | "french" | "français" => Ok(TargetLanguage::French),
            _ => Err(format!("Unknown target language: {}", s)),
        }
    }
}

impl TargetLanguage {
    /// 获取语言的描述性名称
    pub fn display_name(&self) -> &'static str {
        match self {
            TargetLanguage::English => "English",
            TargetLanguage::Chinese => "中文",
            TargetLanguage::Japanese => "日本語",
            TargetLanguage::German => "Deutsch",
            TargetLanguage::French => "Français",
        }
    }

    /// 追加到每个Agent系统提示词末尾的语言指令
    pub fn prompt_instruction(&self) -> &'static str {
        match self {
            TargetLanguage::English => {
                "Write all of your output in English, using precise and professional business language."
            }
            TargetLanguage::Chinese => "请使用中文输出全部内容，确保表达准确、专业。",
            TargetLanguage::Japanese => {
                "すべての出力を日本語で作成し、正確でプロフェッショナルな表現を心がけてください。"
            }
            TargetLanguage::German => {
                "Verfasse die gesamte Ausgabe auf Deutsch in präziser, professioneller Geschäftssprache."
            }
            TargetLanguage::French => {
                "Rédigez l'intégralité de votre réponse en français, dans un langage professionnel et précis."
            }
        }
    }
}
