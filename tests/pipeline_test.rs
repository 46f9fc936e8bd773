//! Integration tests for the extraction pipeline.

use unarticle::extract::references::extract_year;
use unarticle::extract::visuals::collect_figures;
use unarticle::model::UNKNOWN_LANGUAGE;
use unarticle::{
    extract_blocks, extract_blocks_with_options, extract_str, ContentBlock, ExtractOptions,
    ExtractionWarning, SectionType,
};

fn scenario() -> Vec<ContentBlock> {
    vec![
        ContentBlock::heading("My Paper", 1, 0),
        ContentBlock::heading("Abstract", 1, 0),
        ContentBlock::paragraph("This is the abstract.", 0),
        ContentBlock::heading("Introduction", 1, 1),
        ContentBlock::paragraph("Intro text.", 1),
        ContentBlock::heading("References", 1, 2),
        ContentBlock::reference("Smith, J. 2020. Paper X.", 2),
    ]
}

#[test]
fn test_end_to_end_scenario() {
    let article = extract_blocks(&scenario()).unwrap().article;

    assert_eq!(article.title, "My Paper");
    assert_eq!(article.sections[0].text.as_deref(), Some("This is the abstract."));
    assert_eq!(article.sections[1].title, "Introduction");
    assert!(article.sections[1].text_or_empty().contains("Intro text."));
    assert_eq!(article.references[0].year.as_deref(), Some("2020"));
}

#[test]
fn test_short_title_language_is_unknown() {
    let extraction = extract_blocks(&scenario()).unwrap();

    assert_eq!(extraction.article.language, UNKNOWN_LANGUAGE);
    assert!(extraction.report.warnings.iter().any(|w| matches!(
        w,
        ExtractionWarning::LanguageUndetected { title, .. } if title == "My Paper"
    )));
}

#[test]
fn test_end_to_end_from_content_list_json() {
    let json = r#"[
        {"type": "text", "text": "My Paper", "text_level": 1, "page_idx": 0},
        {"type": "text", "text": "Abstract", "text_level": 1, "page_idx": 0},
        {"type": "text", "text": "This is the abstract.", "page_idx": 0},
        {"type": "text", "text": "Introduction", "text_level": 1, "page_idx": 1},
        {"type": "text", "text": "Intro text.", "page_idx": 1},
        {"type": "text", "text": "References", "text_level": 1, "page_idx": 2},
        {"type": "ref_text", "text": "Smith, J. 2020. Paper X.", "page_idx": 2}
    ]"#;
    let from_json = extract_str(json).unwrap();
    let from_blocks = extract_blocks(&scenario()).unwrap();

    assert_eq!(from_json.article, from_blocks.article);
}

#[test]
fn test_first_section_is_always_abstract() {
    let documents = vec![
        scenario(),
        // No abstract at all
        vec![
            ContentBlock::heading("Title", 1, 0),
            ContentBlock::heading("Methods", 1, 0),
            ContentBlock::paragraph("We measured.", 0),
            ContentBlock::heading("Bibliography", 1, 1),
        ],
        // Inline abstract
        vec![
            ContentBlock::heading("Title", 1, 0),
            ContentBlock::paragraph("Abstract. We study parsing.", 0),
            ContentBlock::heading("Results", 1, 1),
        ],
    ];

    for blocks in documents {
        let article = extract_blocks(&blocks).unwrap().article;
        assert!(!article.sections.is_empty());
        assert_eq!(article.sections[0].title, "Abstract");
        assert_eq!(article.sections[0].section_type, Some(SectionType::Abstract));
        assert!(article
            .sections
            .iter()
            .skip(1)
            .all(|s| s.section_type != Some(SectionType::Abstract)));
    }
}

#[test]
fn test_section_text_preserves_order() {
    let blocks = vec![
        ContentBlock::heading("Paper", 1, 0),
        ContentBlock::heading("Body", 1, 0),
        ContentBlock::paragraph("first", 0),
        ContentBlock::image("images/skip.jpg", "Figure 1. Skipped", 0),
        ContentBlock::text_list(vec!["second".into(), "third".into()], 1),
        ContentBlock::reference("not body", 1),
        ContentBlock::code("fourth()", 1),
        ContentBlock::table(None, vec![], vec![], Some("t.jpg".into()), 1),
        ContentBlock::equation("$$fifth$$", 2),
        ContentBlock::heading("Tail", 1, 2),
        ContentBlock::paragraph("outside", 2),
    ];

    let article = extract_blocks(&blocks).unwrap().article;
    let body = article.section("Body").unwrap();

    assert_eq!(
        body.text.as_deref(),
        Some("first\nsecond\nthird\nfourth()\n$$fifth$$\n")
    );
    assert_eq!(body.page_start, 0);
    assert_eq!(body.page_end, 2);
}

#[test]
fn test_figure_grouping_is_idempotent() {
    let blocks = vec![
        ContentBlock::image("images/1a.jpg", "", 0),
        ContentBlock::image("images/1b.jpg", "", 0),
        ContentBlock::image("images/1c.jpg", "Figure 1. Panels", 0),
        ContentBlock::image("images/2.jpg", "Figure 2. Single", 1),
        ContentBlock::paragraph("text", 1),
        ContentBlock::image("images/3.jpg", "", 2),
    ];

    let first = collect_figures(&blocks);
    let second = collect_figures(&blocks);

    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
    assert_eq!(first[0].image_paths.len(), 3);
    assert_eq!(first[0].caption.as_deref(), Some("Figure 1. Panels"));
    assert_eq!(first[1].caption.as_deref(), Some("Figure 2. Single"));
    assert_eq!(first[2].caption, None);
    assert_eq!(
        first.iter().map(|f| f.id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[test]
fn test_reference_ids_are_dense() {
    let mut blocks = vec![
        ContentBlock::heading("Paper", 1, 0),
        ContentBlock::heading("References", 1, 0),
        ContentBlock::reference_list(
            vec![
                "Alpha A. (2001) One.".into(),
                "Beta B. 2002. Two.".into(),
            ],
            0,
        ),
        ContentBlock::paragraph("Received 12 May 2023.", 1),
        ContentBlock::reference("Gamma G. Three, 2003.", 1),
    ];
    blocks.push(ContentBlock::reference("Delta D. Four.", 1));

    let extraction = extract_blocks(&blocks).unwrap();
    let references = &extraction.article.references;

    assert_eq!(references.len(), 4);
    assert_eq!(
        references.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
    assert_eq!(references[2].text, "Gamma G. Three, 2003.");
    assert_eq!(references[3].year, None);
    assert!(extraction
        .report
        .warnings
        .contains(&ExtractionWarning::MissingYear { reference_id: 4 }));
}

#[test]
fn test_year_extraction() {
    assert_eq!(
        extract_year("Smith J. (2019). Some title."),
        Some("2019".to_string())
    );
    assert_eq!(extract_year("No year present here."), None);
}

#[test]
fn test_keyword_splitting() {
    let blocks = vec![
        ContentBlock::heading("Paper", 1, 0),
        ContentBlock::paragraph("Keywords: alpha, beta; gamma", 0),
        ContentBlock::heading("Introduction", 1, 0),
    ];

    let article = extract_blocks(&blocks).unwrap().article;
    assert_eq!(
        article.keywords,
        Some(vec![
            "alpha".to_string(),
            "beta".to_string(),
            "gamma".to_string()
        ])
    );
}

#[test]
fn test_russian_keyword_heading() {
    let blocks = vec![
        ContentBlock::heading(
            "Методы автоматического извлечения структуры научных статей из электронных документов",
            1,
            0,
        ),
        ContentBlock::heading("Ключевые слова", 1, 0),
        ContentBlock::paragraph("анализ; структура", 0),
        ContentBlock::heading("Введение", 1, 0),
    ];

    let article = extract_blocks(&blocks).unwrap().article;
    assert_eq!(
        article.keywords,
        Some(vec!["анализ".to_string(), "структура".to_string()])
    );
    assert_eq!(article.language, "ru");
}

#[test]
fn test_numbered_subsection_is_demoted() {
    let blocks = vec![
        ContentBlock::heading("Paper", 1, 0),
        ContentBlock::heading("Introduction", 1, 0),
        ContentBlock::paragraph("Intro.", 0),
        ContentBlock::heading("2.1 Background", 1, 1),
        ContentBlock::paragraph("Background text.", 1),
        ContentBlock::heading("References", 1, 2),
    ];

    let extraction = extract_blocks(&blocks).unwrap();
    let article = &extraction.article;

    assert!(article.sections.iter().all(|s| s.title != "2.1 Background"));
    let intro = article.section("Introduction").unwrap();
    assert_eq!(
        intro.text.as_deref(),
        Some("Intro.\n2.1 Background\nBackground text.\n")
    );
    assert_eq!(extraction.report.stats.demoted_heading_count, 1);
}

#[test]
fn test_classified_sections() {
    let blocks = vec![
        ContentBlock::heading("Paper", 1, 0),
        ContentBlock::heading("Introduction", 1, 0),
        ContentBlock::heading("Materials and Methods", 1, 0),
        ContentBlock::heading("Conclusions", 1, 0),
        ContentBlock::heading("References", 1, 0),
    ];

    let options = ExtractOptions::new().with_section_classification(true);
    let article = extract_blocks_with_options(&blocks, options).unwrap().article;
    let types: Vec<_> = article.sections.iter().map(|s| s.section_type).collect();

    assert_eq!(
        types,
        vec![
            Some(SectionType::Abstract),
            Some(SectionType::Introduction),
            Some(SectionType::Methods),
            Some(SectionType::Conclusion),
        ]
    );
}

#[test]
fn test_tables_resolve_against_output_dir() {
    let blocks = vec![
        ContentBlock::heading("Paper", 1, 0),
        ContentBlock::heading("Results", 1, 0),
        ContentBlock::table(
            Some("<table></table>".into()),
            vec!["Table 1. Scores".into()],
            vec!["n = 10".into()],
            Some("images/t1.jpg".into()),
            0,
        ),
        ContentBlock::table(None, vec![], vec![], None, 1),
        ContentBlock::table(None, vec![], vec![], Some("images/t2.jpg".into()), 1),
    ];

    let options = ExtractOptions::new().with_output_dir("out");
    let extraction = extract_blocks_with_options(&blocks, options).unwrap();
    let tables = &extraction.article.tables;

    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0].id, 1);
    assert_eq!(tables[1].id, 2);
    assert_eq!(
        std::path::Path::new(&tables[0].image_path),
        std::path::Path::new("out/images/t1.jpg")
    );
    assert_eq!(tables[0].caption, vec!["Table 1. Scores", "n = 10"]);
    assert_eq!(extraction.report.stats.skipped_table_count, 1);
}

#[test]
fn test_strings_pass_through_unchanged_by_default() {
    // "ü" written as u + combining diaeresis
    let decomposed = "Mu\u{308}ller, K. 2019. Title.";
    let blocks = vec![
        ContentBlock::heading("Paper", 1, 0),
        ContentBlock::heading("References", 1, 0),
        ContentBlock::reference(decomposed, 0),
    ];

    let article = extract_blocks(&blocks).unwrap().article;
    assert_eq!(article.references[0].text, decomposed);

    let options = ExtractOptions::new().with_unicode_normalization(true);
    let article = extract_blocks_with_options(&blocks, options).unwrap().article;
    assert_eq!(article.references[0].text, "Müller, K. 2019. Title.");
}
