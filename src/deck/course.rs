//! The "AI 助力公務效率提升" training course, slide by slide.
use crate::config::DeckConfig;
use crate::error::Result;
use crate::ooxml::pptx::Presentation;

use super::payload::{
    ContentSlide, DeckSlide, SectionSlide, Step, StepSlide, TableSlide, TitleSlide, ToolCard,
    ToolSlide,
};

/// Document title written to the core properties.
pub const COURSE_TITLE: &str = "AI 助力公務效率提升";

fn row<const N: usize>(cells: [&str; N]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

fn steps<const N: usize>(pairs: [(&str, &str); N]) -> Vec<Step> {
    pairs.iter().map(|&(h, d)| Step::new(h, d)).collect()
}

fn tools(cards: [(&str, &str, &str, &str); 4]) -> [ToolCard; 4] {
    cards.map(|(name, desc, url, tag)| ToolCard::new(name, desc, url, tag))
}

/// The course script in presentation order.
pub fn course_slides() -> Result<Vec<DeckSlide>> {
    Ok(vec![
        DeckSlide::Title(
            TitleSlide::new("🤖 AI 助力公務效率提升", "善用人工智慧工具，提升工作效能")
                .with_meta("📍 文化部公務員培訓 ｜ ⏱️ 2 小時"),
        ),
        DeckSlide::Table(TableSlide::new(
            "📋 課程大綱",
            row(["段落", "主題", "時間"]),
            vec![
                row(["🔵 一", "Gemini：計劃構思與資料收集", "35 分鐘"]),
                row(["🟢 二", "AI 生成圖片與表格", "30 分鐘"]),
                row(["🟣 三", "AI 生成影片與字幕工具", "30 分鐘"]),
                row(["🔴 四", "AI 整理會議記錄", "20 分鐘"]),
                row(["⚪", "Q&A + 總結", "5 分鐘"]),
            ],
        )?),
        // Part 1
        DeckSlide::Section(SectionSlide::new(
            1,
            "Google Gemini",
            "計劃構思與資料收集 ｜ 35 分鐘",
        )),
        DeckSlide::Content(ContentSlide::new(
            "什麼是 Google Gemini？",
            [
                "🧠 AI 智慧助手：Google 最新大型語言模型",
                "🌐 即時搜尋：整合 Google 搜尋能力",
                "📎 文件分析：可上傳 PDF、圖片進行分析",
                "💬 對話式介面：用自然語言溝通",
                "",
                "📍 網址：gemini.google.com",
                "💡 用 Google 帳號登入即可免費使用",
            ],
        )),
        DeckSlide::Steps(StepSlide::new(
            "實作步驟：開始使用 Gemini",
            steps([
                ("開啟 Gemini 網站", "在瀏覽器輸入 gemini.google.com"),
                ("登入 Google 帳號", "使用公務信箱或個人 Gmail 帳號登入"),
                ("開始對話", "在輸入框輸入你的問題或需求，按 Enter 送出"),
                ("持續追問", "根據回答繼續提問，讓 AI 幫你完善內容"),
            ]),
        )),
        DeckSlide::Content(ContentSlide::new(
            "實作：計劃構思",
            [
                "📌 情境：規劃一場文化藝術節活動",
                "",
                "💬 提示詞範例：",
                "「我要規劃一場為期三天的在地文化藝術節",
                "預算：500萬元，預期參與人數：5000人",
                "",
                "請幫我：",
                "1. 列出活動架構和時間表",
                "2. 建議的表演類型和攤位規劃",
                "3. 需要注意的法規和申請事項",
                "4. 預算分配建議」",
                "",
                "💡 提示：具體描述需求，AI 才能給出精準回答",
            ],
        )),
        DeckSlide::Content(ContentSlide::new(
            "提示詞技巧",
            [
                "🎯 明確具體：說明目的、對象、預算、時間限制",
                "📋 條列需求：用 1、2、3 列出要 AI 做的事情",
                "🎭 設定角色：「請扮演資深活動策劃」",
                "📝 指定格式：「請用表格呈現」「限500字內」",
                "🔄 持續追問：「請更詳細說明第三點」",
                "📎 上傳文件：直接拖拉 PDF 或圖片讓 AI 分析",
            ],
        )),
        // Part 2
        DeckSlide::Section(SectionSlide::new(
            2,
            "AI 生成圖片與表格",
            "視覺化工具介紹 ｜ 30 分鐘",
        )),
        DeckSlide::Tools(ToolSlide::from_cards(
            "圖片生成工具推薦",
            tools([
                ("🎨 Canva AI", "中文介面、模板豐富", "canva.com", "⭐ 首推"),
                ("🖼️ Microsoft Designer", "整合 Office 365", "designer.microsoft.com", "公務適用"),
                ("🔥 Adobe Firefly", "商用安全、版權無慮", "firefly.adobe.com", "正式發布"),
                ("🆓 Bing Image Creator", "免費使用", "bing.com/create", "免費"),
            ]),
        )),
        DeckSlide::Steps(StepSlide::new(
            "實作：用 Canva 製作活動海報",
            steps([
                ("開啟 Canva → 選擇「海報」", "選擇適合的尺寸，如 A3 或社群貼文尺寸"),
                ("使用「AI 魔法設計」", "點擊左側「設計」→ 輸入活動主題關鍵字"),
                ("AI 生成圖片", "點擊「應用程式」→「AI 圖片產生器」→ 輸入描述"),
                ("下載成品", "右上角「分享」→「下載」→ 選擇 PNG 或 PDF"),
            ]),
        )),
        DeckSlide::Content(ContentSlide::new(
            "Gamma：AI 自動生成簡報",
            [
                "📍 網址：gamma.app",
                "",
                "🚀 使用步驟：",
                "1. 登入 gamma.app",
                "2. 點擊「Create new」",
                "3. 輸入簡報主題",
                "4. 選擇風格和頁數",
                "5. AI 自動生成！",
                "",
                "💬 範例：「文化資產保存政策簡報，包含現況分析、面臨挑戰、解決方案、預期成效」",
            ],
        )),
        // Part 3
        DeckSlide::Section(SectionSlide::new(
            3,
            "AI 生成影片與字幕",
            "多媒體製作工具 ｜ 30 分鐘",
        )),
        DeckSlide::Tools(ToolSlide::from_cards(
            "AI 影片生成工具",
            tools([
                ("🎬 Canva 影片", "模板豐富、操作直覺", "canva.com", "⭐ 入門推薦"),
                ("👤 Synthesia", "AI 虛擬主播", "synthesia.io", "專業級"),
                ("🎭 HeyGen", "AI 數位人、中文語音", "heygen.com", "專業級"),
                ("✈️ Runway", "文字/圖片轉影片", "runwayml.com", "進階"),
            ]),
        )),
        DeckSlide::Tools(ToolSlide::from_cards(
            "字幕生成工具",
            tools([
                ("✂️ 剪映 CapCut", "免費、中文辨識超準", "capcut.com", "⭐ 強力推薦"),
                ("🌐 VEED.io", "線上工具、支援翻譯", "veed.io", "線上工具"),
                ("🎙️ 雅婷逐字稿", "工研院開發、台灣口音優化", "asr.yating.tw", "本土方案"),
                ("📺 YouTube 自動字幕", "上傳後自動產生", "youtube.com", "免費"),
            ]),
        )),
        DeckSlide::Steps(StepSlide::new(
            "實作：用剪映自動上字幕",
            steps([
                ("下載剪映（電腦版或手機版）", "官網下載，免費使用所有功能"),
                ("匯入影片檔案", "將錄好的影片拖入剪映時間軸"),
                (
                    "點擊「文字」→「智能字幕」→「識別字幕」",
                    "AI 自動辨識語音並生成字幕",
                ),
                ("校對並匯出", "修正錯字，選擇匯出格式（影片或 SRT 字幕檔）"),
            ]),
        )),
        // Part 4
        DeckSlide::Section(SectionSlide::new(
            4,
            "AI 整理會議記錄",
            "會議效率提升 ｜ 20 分鐘",
        )),
        DeckSlide::Tools(ToolSlide::from_cards(
            "會議記錄工具",
            tools([
                ("🔥 Fireflies.ai", "自動加入會議錄音", "fireflies.ai", "⭐ 推薦"),
                ("📝 tl;dv", "錄製+轉錄+摘要", "tldv.io", "免費版夠用"),
                ("🏢 MS Copilot in Teams", "公務機關可能已有授權", "teams.microsoft.com", "公務適用"),
                ("🦦 Otter.ai", "即時轉錄+摘要", "otter.ai", "英文最強"),
            ]),
        )),
        DeckSlide::Steps(StepSlide::new(
            "本地方案（資安優先）",
            steps([
                ("會議錄音", "用手機或電腦錄音軟體"),
                ("語音轉文字", "用剪映或雅婷逐字稿轉成文字檔"),
                (
                    "貼到 Gemini 整理",
                    "請 AI 整理成：會議摘要、決議事項、待辦事項、下次議題",
                ),
                ("人工審核", "確認內容正確後存檔"),
            ]),
        )),
        // Wrap-up
        DeckSlide::Table(TableSlide::new(
            "📌 工具速查表",
            row(["需求", "推薦工具"]),
            vec![
                row(["📝 計劃構思、資料整理", "Gemini、ChatGPT"]),
                row(["🎨 圖片生成", "Canva AI、Microsoft Designer"]),
                row(["📊 簡報製作", "Gamma、Canva"]),
                row(["🎬 影片製作", "Canva、剪映"]),
                row(["💬 字幕生成", "剪映、VEED.io"]),
                row(["📋 會議記錄", "剪映+Gemini、Fireflies"]),
            ],
        )?),
        DeckSlide::Warning,
        DeckSlide::Title(
            TitleSlide::new("🙋 Q&A 時間", "有任何問題歡迎提問！")
                .with_meta("感謝參與 ｜ 祝工作順利 🎉"),
        ),
    ])
}

/// Render the whole course into a new presentation sized per `config`.
pub fn build_course_deck(config: &DeckConfig) -> Result<Presentation> {
    let mut pres = Presentation::new(config.slide_width, config.slide_height);
    pres.set_title(COURSE_TITLE);

    let slides = course_slides()?;
    for slide in &slides {
        slide.render(&mut pres)?;
    }

    tracing::info!(slides = pres.slide_count(), "course deck built");
    Ok(pres)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_outline() {
        let slides = course_slides().unwrap();
        assert_eq!(slides.len(), 21);

        let sections: Vec<u32> = slides
            .iter()
            .filter_map(|s| match s {
                DeckSlide::Section(section) => Some(section.number),
                _ => None,
            })
            .collect();
        assert_eq!(sections, vec![1, 2, 3, 4]);
        assert!(matches!(slides[19], DeckSlide::Warning));
    }

    #[test]
    fn test_build_course_deck() {
        let pres = build_course_deck(&DeckConfig::default()).unwrap();
        assert_eq!(pres.slide_count(), 21);
        assert_eq!(pres.title(), COURSE_TITLE);
        assert_eq!(
            pres.slides()[0].title().as_deref(),
            Some("🤖 AI 助力公務效率提升")
        );
        assert_eq!(pres.slides()[20].title().as_deref(), Some("🙋 Q&A 時間"));
    }
}
