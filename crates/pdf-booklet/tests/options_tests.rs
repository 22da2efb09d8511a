use pdf_booklet::*;

#[test]
fn test_defaults() {
    let options = BookletOptions::default();
    assert_eq!(options.paper, None);
    assert!(!options.short_edge);
    assert!(options.crop);
    assert_eq!(options.signature, 0);
    assert_eq!(options.resolution, 72);
    assert_eq!(
        options.margins,
        Margins {
            outer: 40,
            inner: 150,
            top: 30,
            bottom: 30,
        }
    );
    assert!(options.validate().is_ok());
}

#[test]
fn test_batch_defaults() {
    let options = BookletOptions::batch_defaults();
    assert_eq!(options.paper.as_deref(), Some("a4paper"));
    assert!(options.short_edge);
    assert!(!options.crop);
    assert_eq!(options.margins, Margins::default());
}

#[test]
fn test_validation_signature_multiple_of_four() {
    let mut options = BookletOptions::default();

    for valid in [0, 4, 8, 16, 32] {
        options.signature = valid;
        assert!(options.validate().is_ok(), "signature {}", valid);
    }

    for invalid in [1, 3, 6, 10] {
        options.signature = invalid;
        match options.validate() {
            Err(BookletError::Config(msg)) => assert!(msg.contains("multiple of 4")),
            other => panic!("Expected Config error for {}, got {:?}", invalid, other),
        }
    }
}

#[test]
fn test_validation_resolution_and_paper() {
    let options = BookletOptions {
        resolution: 0,
        ..Default::default()
    };
    assert!(options.validate().is_err());

    let options = BookletOptions {
        paper: Some("  ".to_string()),
        ..Default::default()
    };
    assert!(options.validate().is_err());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let options = BookletOptions {
        paper: Some("letterpaper".to_string()),
        short_edge: true,
        crop: false,
        margins: Margins {
            outer: 20,
            inner: 100,
            top: 10,
            bottom: 5,
        },
        signature: 16,
        resolution: 150,
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    options.save(path).await.unwrap();
    let loaded = BookletOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_partial_config_uses_defaults() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), r#"{"signature": 8, "margins": {"inner": 90}}"#).unwrap();

    let loaded = BookletOptions::load(temp_file.path()).await.unwrap();

    assert_eq!(loaded.signature, 8);
    assert_eq!(loaded.margins.inner, 90);
    assert_eq!(loaded.margins.outer, 40);
    assert!(loaded.crop);
    assert_eq!(loaded.resolution, 72);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_malformed_config() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "signature = 8").unwrap();

    match BookletOptions::load(temp_file.path()).await {
        Err(BookletError::Config(msg)) => assert!(msg.contains("Failed to parse config")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}
