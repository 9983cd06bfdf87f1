//! 链表内容的文本展示，与链表本身的增删逻辑分离。

use std::fmt::Display;

use crate::circular::CircularChain;

pub const ARROW: &str = " -> ";

const EMPTY: &str = "The list is empty.";

/// 把元素依次用分隔符连接，末尾以 `None` 标出链表终点
///
/// 空序列返回 `"The list is empty."`。
pub fn render<'a, T, I>(items: I, separator: &str) -> String
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut items = items.into_iter().peekable();
    if items.peek().is_none() {
        return EMPTY.to_string();
    }

    let mut out = String::new();
    for item in items {
        out.push_str(&item.to_string());
        out.push_str(separator);
    }
    out.push_str("None");
    out
}

/// 环形链表的展示：绕一圈后再把头元素放在括号中，表示回到起点
pub fn render_circular<T: Display>(list: &CircularChain<T>, separator: &str) -> String {
    let Some(head) = list.peek_front() else {
        return EMPTY.to_string();
    };

    let mut out = String::new();
    for item in list {
        out.push_str(&item.to_string());
        out.push_str(separator);
    }
    out.push_str(&format!("({})", head));
    out
}

/// 每行一个元素
pub fn render_lines<'a, T, I>(items: I) -> String
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear::LinearChain;

    #[test]
    fn test_render_linear() {
        let list = LinearChain::from(vec![1, 2, 3]);
        assert_eq!(render(&list, ARROW), "1 -> 2 -> 3 -> None");

        let empty: LinearChain<i32> = LinearChain::new();
        assert_eq!(render(&empty, ARROW), "The list is empty.");
    }

    #[test]
    fn test_render_circular() {
        let list = CircularChain::from(vec![10, 20, 30]);
        assert_eq!(render_circular(&list, ARROW), "10 -> 20 -> 30 -> (10)");

        let single = CircularChain::from(vec![5]);
        assert_eq!(render_circular(&single, " => "), "5 => (5)");

        let empty: CircularChain<i32> = CircularChain::new();
        assert_eq!(render_circular(&empty, ARROW), "The list is empty.");
    }

    #[test]
    fn test_render_lines() {
        let list = LinearChain::from(vec!["a", "b"]);
        assert_eq!(render_lines(&list), "a\nb");
    }
}
