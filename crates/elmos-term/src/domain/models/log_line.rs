#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Command,
    Output,
    Success,
    Failure,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub kind: LogKind,
    pub text: String,
}

impl LogLine {
    pub fn new(kind: LogKind, text: &str) -> LogLine {
        return LogLine {
            kind,
            text: text.replace('\t', "  "),
        };
    }

    pub fn output(text: &str) -> LogLine {
        return LogLine::new(LogKind::Output, text);
    }

    pub fn success() -> LogLine {
        return LogLine::new(LogKind::Success, "Completed");
    }

    pub fn failure(reason: &str) -> LogLine {
        return LogLine::new(LogKind::Failure, &format!("Error: {reason}"));
    }
}
