use pdf_booklet::*;

#[test]
fn test_default_options() {
    let options = BookletOptions::default();
    assert_eq!(options.paper_size, PaperSize::A4);
    assert_eq!(options.scaling_mode, ScalingMode::Stretch);
    assert_eq!(options.output_mode, OutputMode::Combined);
    assert_eq!(options.page_layout, PageLayout::SinglePage);
    assert!(!options.is_split());
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_rejects_empty_paper() {
    let mut options = BookletOptions::default();

    options.paper_size = PaperSize::Custom {
        width_mm: 0.0,
        height_mm: 297.0,
    };
    match options.validate() {
        Err(ImposeError::Config(msg)) => assert!(msg.contains("positive")),
        _ => panic!("Expected Config error"),
    }

    options.paper_size = PaperSize::Custom {
        width_mm: 210.0,
        height_mm: -1.0,
    };
    assert!(options.validate().is_err());

    options.paper_size = PaperSize::Custom {
        width_mm: 200.0,
        height_mm: 300.0,
    };
    assert!(options.validate().is_ok());
}

#[test]
fn test_split_flag() {
    let options = BookletOptions {
        output_mode: OutputMode::Split,
        ..Default::default()
    };
    assert!(options.is_split());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let options = BookletOptions {
        paper_size: PaperSize::Letter,
        scaling_mode: ScalingMode::Fit,
        output_mode: OutputMode::Split,
        page_layout: PageLayout::TwoColumnLeft,
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    options.save(path).await.unwrap();
    let loaded = BookletOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_partial_options() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), r#"{ "output_mode": "Split" }"#).unwrap();

    let loaded = BookletOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.output_mode, OutputMode::Split);
    assert_eq!(loaded.paper_size, PaperSize::A4);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_invalid_options() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "not json").unwrap();

    match BookletOptions::load(temp_file.path()).await {
        Err(ImposeError::Config(msg)) => assert!(msg.contains("Failed to parse config")),
        _ => panic!("Expected Config error"),
    }
}
