//! Unit tests for SourcePosition, SourceFrame and EditorPosition

use core_types::{EditorPosition, SourceFrame, SourcePosition};

#[cfg(test)]
mod source_position_tests {
    use super::*;

    #[test]
    fn test_source_position_creation() {
        let pos = SourcePosition::new(10, 5);

        assert_eq!(pos.line, 10);
        assert_eq!(pos.column, 5);
    }

    #[test]
    fn test_source_position_zero_values_clamp_to_one() {
        let pos = SourcePosition::new(0, 0);

        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 1);
    }

    #[test]
    fn test_source_position_equality() {
        assert_eq!(SourcePosition::new(3, 4), SourcePosition::new(3, 4));
        assert_ne!(SourcePosition::new(3, 4), SourcePosition::new(4, 3));
    }
}

#[cfg(test)]
mod source_frame_tests {
    use super::*;

    #[test]
    fn test_source_frame_with_function_name() {
        let frame = SourceFrame::new(Some("myFunction".to_string()), "file.js", 25, 10);

        assert_eq!(frame.function_name, Some("myFunction".to_string()));
        assert_eq!(frame.file, "file.js");
        assert_eq!(frame.line, 25);
        assert_eq!(frame.column, 10);
        assert_eq!(frame.to_string(), "at myFunction (file.js:25:10)");
    }

    #[test]
    fn test_source_frame_anonymous() {
        let frame = SourceFrame::new(None, "file.js", 1, 1);

        assert_eq!(frame.function_name, None);
        assert_eq!(frame.to_string(), "at file.js:1:1");
    }

    #[test]
    fn test_source_frame_negative_line_clamps() {
        let frame = SourceFrame::new(None, "file.js", -1, -20);

        assert_eq!(frame.line, 1);
        assert_eq!(frame.column, 1);
    }

    #[test]
    fn test_source_frame_from_position() {
        let frame = SourceFrame::at_position("file.js", SourcePosition::new(2, 9));

        assert_eq!(frame.location(), "file.js:2:9");
        assert!(frame.function_name.is_none());
    }

    #[test]
    fn test_source_frame_serializes() {
        let frame = SourceFrame::new(Some("f".to_string()), "file.js", 3, 4);
        let json = serde_json::to_value(&frame).unwrap();

        assert_eq!(json["function_name"], "f");
        assert_eq!(json["line"], 3);
    }
}

#[cfg(test)]
mod editor_position_tests {
    use super::*;

    #[test]
    fn test_editor_position_is_zero_based() {
        let frame = SourceFrame::new(None, "file.js", 12, 3);
        let pos = EditorPosition::from(&frame);

        assert_eq!(pos, EditorPosition { line: 11, ch: 2 });
    }

    #[test]
    fn test_editor_position_first_line() {
        let frame = SourceFrame::new(None, "file.js", 0, 0);
        let pos = EditorPosition::from(&frame);

        assert_eq!(pos, EditorPosition { line: 0, ch: 0 });
    }
}
