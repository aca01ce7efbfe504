//! Integration tests for the clipboard module.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use disco::clipboard::copy::Copy;
use disco::clipboard::tool::{CopyTool, CopyToolError};
use disco::clipboard::{ClipboardError, CopyMethod, CopyResult};

/// Scripted tool that records how often it was asked to copy.
struct MockTool {
    method: CopyMethod,
    available: bool,
    outcome: Result<(), CopyToolError>,
    calls: Arc<AtomicUsize>,
    copied: Arc<Mutex<Option<String>>>,
}

impl MockTool {
    fn new(method: CopyMethod, outcome: Result<(), CopyToolError>) -> Self {
        Self {
            method,
            available: true,
            outcome,
            calls: Arc::new(AtomicUsize::new(0)),
            copied: Arc::new(Mutex::new(None)),
        }
    }

    fn unavailable(method: CopyMethod) -> Self {
        Self {
            available: false,
            ..Self::new(method, Ok(()))
        }
    }
}

impl CopyTool for MockTool {
    fn method(&self) -> CopyMethod {
        self.method
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.outcome.is_ok() {
            *self.copied.lock().unwrap() = Some(text.to_string());
        }
        self.outcome.clone()
    }
}

mod result_tests {
    use super::*;

    #[test]
    fn copy_method_name_returns_correct_strings() {
        assert_eq!(CopyMethod::Pbcopy.name(), "pbcopy");
        assert_eq!(CopyMethod::WlCopy.name(), "wl-copy");
        assert_eq!(CopyMethod::Xclip.name(), "xclip");
        assert_eq!(CopyMethod::Xsel.name(), "xsel");
    }

    #[test]
    fn copy_result_message_names_tool() {
        let result = CopyResult::new(CopyMethod::Xclip, 42);
        assert_eq!(result.message(), "Copied 42 bytes to clipboard (xclip)");
    }
}

mod copy_tests {
    use super::*;

    #[test]
    fn first_working_tool_wins() {
        let first = MockTool::new(CopyMethod::WlCopy, Ok(()));
        let second = MockTool::new(CopyMethod::Xclip, Ok(()));
        let second_calls = second.calls.clone();
        let copied = first.copied.clone();

        let copy = Copy::with_tools(vec![Box::new(first), Box::new(second)]);
        let result = copy.text("```ansi\nhi\n```").unwrap();

        assert_eq!(result.tool, CopyMethod::WlCopy);
        assert_eq!(result.size_bytes, 14);
        assert_eq!(copied.lock().unwrap().as_deref(), Some("```ansi\nhi\n```"));
        assert_eq!(second_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unavailable_tools_are_skipped() {
        let missing = MockTool::unavailable(CopyMethod::WlCopy);
        let missing_calls = missing.calls.clone();
        let xsel = MockTool::new(CopyMethod::Xsel, Ok(()));

        let copy = Copy::with_tools(vec![Box::new(missing), Box::new(xsel)]);
        assert_eq!(copy.text("x").unwrap().tool, CopyMethod::Xsel);
        assert_eq!(missing_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn failing_tool_falls_through_to_next() {
        let broken = MockTool::new(
            CopyMethod::Xclip,
            Err(CopyToolError::Failed("no display".to_string())),
        );
        let broken_calls = broken.calls.clone();
        let xsel = MockTool::new(CopyMethod::Xsel, Ok(()));

        let copy = Copy::with_tools(vec![Box::new(broken), Box::new(xsel)]);
        assert_eq!(copy.text("x").unwrap().tool, CopyMethod::Xsel);
        assert_eq!(broken_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn all_tools_failing_is_no_tool_available() {
        let copy = Copy::with_tools(vec![
            Box::new(MockTool::new(CopyMethod::WlCopy, Err(CopyToolError::NotFound))),
            Box::new(MockTool::new(
                CopyMethod::Xclip,
                Err(CopyToolError::Failed("boom".to_string())),
            )),
            Box::new(MockTool::unavailable(CopyMethod::Xsel)),
        ]);
        assert!(matches!(
            copy.text("x"),
            Err(ClipboardError::NoToolAvailable)
        ));
    }

    #[test]
    fn empty_text_is_rejected_before_any_tool_runs() {
        let tool = MockTool::new(CopyMethod::Pbcopy, Ok(()));
        let calls = tool.calls.clone();
        let copy = Copy::with_tools(vec![Box::new(tool)]);
        assert!(matches!(copy.text(""), Err(ClipboardError::EmptyContent)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn no_tools_is_unsupported_platform() {
        let copy = Copy::with_tools(Vec::new());
        assert!(matches!(
            copy.text("x"),
            Err(ClipboardError::UnsupportedPlatform)
        ));
    }

    #[test]
    fn platform_tools_match_target() {
        let copy = Copy::new();
        let names: Vec<_> = copy.tools().iter().map(|t| t.name()).collect();
        if cfg!(target_os = "macos") {
            assert_eq!(names, vec!["pbcopy"]);
        } else if cfg!(target_os = "linux") {
            assert_eq!(names, vec!["wl-copy", "xclip", "xsel"]);
        }
    }
}
