use super::*;

#[test]
fn test_rank_order() {
    assert!(LogLevel::Error < LogLevel::Warn);
    assert!(LogLevel::Warn < LogLevel::Info);
    assert!(LogLevel::Info < LogLevel::Debug);
    assert_eq!(LogLevel::Error.rank(), 0);
    assert_eq!(LogLevel::Debug.rank(), 3);
}

#[test]
fn test_permits_matrix() {
    for threshold in LogLevel::ALL {
        for message in LogLevel::ALL {
            assert_eq!(
                threshold.permits(message),
                message.rank() <= threshold.rank(),
                "threshold={threshold} message={message}"
            );
        }
    }

    assert!(LogLevel::Warn.permits(LogLevel::Error));
    assert!(LogLevel::Warn.permits(LogLevel::Warn));
    assert!(!LogLevel::Warn.permits(LogLevel::Info));
    assert!(!LogLevel::Warn.permits(LogLevel::Debug));
}

#[test]
fn test_parse_level() {
    assert_eq!("debug".parse::<LogLevel>(), Ok(LogLevel::Debug));
    assert_eq!(" WARN ".parse::<LogLevel>(), Ok(LogLevel::Warn));
    assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));

    let err = "verbose".parse::<LogLevel>().unwrap_err();
    assert_eq!(err, ParseLevelError("verbose".to_string()));
    assert!(err.to_string().contains("verbose"));
}

#[test]
fn test_labels() {
    assert_eq!(LogLevel::Error.as_label(), "ERROR");
    assert_eq!(LogLevel::Info.to_string(), "info");
}
