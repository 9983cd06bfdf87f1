use std::fmt::{self, Debug};
use std::marker::PhantomData;
use std::ptr::NonNull;
use std::str::FromStr;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::ChainError;

/// 构造时确定、之后不可更改的工作模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum Mode {
    /// 后进先出：头部插入，头部删除
    Stack,
    /// 先进先出：尾部插入，头部删除
    Queue,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Stack => "stack",
            Mode::Queue => "queue",
        }
    }
}

impl FromStr for Mode {
    type Err = ChainError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "stack" => Ok(Mode::Stack),
            "queue" => Ok(Mode::Queue),
            other => Err(ChainError::InvalidMode(other.to_string())),
        }
    }
}

impl TryFrom<String> for Mode {
    type Error = ChainError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 使用裸指针实现的节点
struct Node<T> {
    value: T,
    next: Option<NonNull<Node<T>>>,
}

/// 栈/队列两用的单向链表
///
/// 栈模式只维护头指针和计数；队列模式额外维护尾指针，使尾部插入为 O(1)。
/// 队列模式下尾节点的 `next` 始终为空，头指针为空时尾指针也为空。
pub struct DualModeChain<T> {
    mode: Mode,
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    /// 仅在栈模式下维护
    size: usize,
    /// 使用 PhantomData 标记 T 的所有权
    _marker: PhantomData<Box<Node<T>>>,
}

impl<T> DualModeChain<T> {
    pub fn new(mode: Mode) -> Self {
        debug!("dual-mode chain created in {} mode", mode);
        DualModeChain {
            mode,
            head: None,
            tail: None,
            size: 0,
            _marker: PhantomData,
        }
    }

    pub fn stack() -> Self {
        Self::new(Mode::Stack)
    }

    pub fn queue() -> Self {
        Self::new(Mode::Queue)
    }

    /// 由字符串标签构造，只接受 `"stack"` 和 `"queue"`
    pub fn with_tag(tag: &str) -> Result<Self, ChainError> {
        let mode = tag.parse()?;
        Ok(Self::new(mode))
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// 栈模式直接返回计数，队列模式遍历计数
    pub fn len(&self) -> usize {
        match self.mode {
            Mode::Stack => self.size,
            Mode::Queue => self.iter().count(),
        }
    }

    /// 按模式添加元素：栈压入头部，队列追加到尾部
    pub fn add(&mut self, value: T) {
        match self.mode {
            Mode::Stack => self.push_front(value),
            Mode::Queue => self.push_back(value),
        }
    }

    /// 从头部移除元素；为空时返回 `None`，两种模式一致
    pub fn remove(&mut self) -> Option<T> {
        self.head.map(|head_ptr| unsafe {
            // 转换回 Box，使 Rust 接管内存管理
            let head = Box::from_raw(head_ptr.as_ptr());
            self.head = head.next;

            match self.mode {
                Mode::Stack => self.size -= 1,
                Mode::Queue => {
                    if self.head.is_none() {
                        self.tail = None;
                    }
                }
            }

            trace!("{}: removed front", self.mode);
            head.value
        })
    }

    /// 查看栈顶或队首，不修改链表
    pub fn peek_front(&self) -> Option<&T> {
        unsafe { self.head.map(|head| &(*head.as_ptr()).value) }
    }

    /// 清空链表，释放所有节点
    pub fn clear(&mut self) {
        while self.remove().is_some() {}
    }

    /// 从头到尾的迭代器：栈为从顶到底，队列为从队首到队尾
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.head,
            _marker: PhantomData,
        }
    }

    fn push_front(&mut self, value: T) {
        let node = Box::new(Node {
            value,
            next: self.head,
        });

        // 将 Box 转换为裸指针
        let node_ptr = NonNull::from(Box::leak(node));

        self.head = Some(node_ptr);
        self.size += 1;
        trace!("stack: pushed");
    }

    fn push_back(&mut self, value: T) {
        let node = Box::new(Node { value, next: None });
        let node_ptr = NonNull::from(Box::leak(node));

        if let Some(tail) = self.tail {
            unsafe {
                (*tail.as_ptr()).next = Some(node_ptr);
            }
        } else {
            // 空队列：新节点既是队首也是队尾
            self.head = Some(node_ptr);
        }

        self.tail = Some(node_ptr);
        trace!("queue: pushed");
    }
}

/// 迭代器实现
pub struct Iter<'a, T> {
    current: Option<NonNull<Node<T>>>,
    _marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|curr| unsafe {
            let current = &*curr.as_ptr();
            self.current = current.next;
            &current.value
        })
    }
}

impl<'a, T> IntoIterator for &'a DualModeChain<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<T> for DualModeChain<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

// Drop 实现，确保所有节点被正确释放
impl<T> Drop for DualModeChain<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Debug> Debug for DualModeChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mode)?;
        f.debug_list().entries(self.iter()).finish()
    }
}
