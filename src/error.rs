use std::fmt;

/// 链表操作可能报告的错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// 链表为空，无法按位置删除
    Empty,
    /// 位置超出链表长度，链表保持不变
    OutOfRange { position: usize, len: usize },
    /// 无法识别的模式标签
    InvalidMode(String),
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ChainError::Empty => write!(f, "The list is empty."),
            ChainError::OutOfRange { position, len } => {
                write!(f, "Position {} out of range (length {}).", position, len)
            }
            ChainError::InvalidMode(ref tag) => {
                write!(f, "Invalid mode '{}': the type must be 'queue' or 'stack'.", tag)
            }
        }
    }
}

impl std::error::Error for ChainError {}
