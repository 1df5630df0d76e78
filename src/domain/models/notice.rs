#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NoticeType {
    Success,
    Error,
}

/// A one-shot user-facing notice shown after a mutation, mirroring the
/// success/error flash messages of a web flow.
pub struct Notice {
    pub ntype: NoticeType,
    pub text: String,
}

impl Notice {
    pub fn success(text: &str) -> Notice {
        return Notice {
            ntype: NoticeType::Success,
            text: text.to_string(),
        };
    }

    pub fn error(text: &str) -> Notice {
        return Notice {
            ntype: NoticeType::Error,
            text: text.to_string(),
        };
    }
}
