use std::fmt::{self, Debug};

use log::{trace, warn};

use crate::error::ChainError;

/// 单向链表的节点
struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// 以头指针为入口、支持按位置增删查的单向链表
///
/// 不缓存长度，`len` 每次遍历整条链计数。
pub struct LinearChain<T> {
    head: Option<Box<Node<T>>>,
}

impl<T> LinearChain<T> {
    /// 创建一个空链表
    pub fn new() -> Self {
        LinearChain { head: None }
    }

    /// 判断链表是否为空
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// 遍历计数，O(n)
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// 清空链表
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// 在链表头部添加元素
    pub fn push_front(&mut self, value: T) {
        let new_node = Box::new(Node {
            value,
            next: self.head.take(),
        });
        self.head = Some(new_node);
        trace!("linear: pushed to front");
    }

    /// 在链表尾部添加元素，需要走到最后一个节点
    pub fn push_back(&mut self, value: T) {
        let new_node = Box::new(Node { value, next: None });

        let mut current = &mut self.head;

        while let Some(ref mut node) = *current {
            current = &mut node.next;
        }

        *current = Some(new_node);
        trace!("linear: pushed to back");
    }

    /// 在 `position` 处插入元素
    ///
    /// `position == len()` 等价于 `push_back`；超出长度时返回
    /// `OutOfRange`，链表不变。
    pub fn insert(&mut self, value: T, position: usize) -> Result<(), ChainError> {
        if position == 0 {
            self.push_front(value);
            return Ok(());
        }

        if let Some(prev) = self.node_mut(position - 1) {
            let next = prev.next.take();
            prev.next = Some(Box::new(Node { value, next }));
            trace!("linear: inserted at {}", position);
            return Ok(());
        }

        let len = self.len();
        warn!("linear: insert at {} rejected, length is {}", position, len);
        Err(ChainError::OutOfRange { position, len })
    }

    /// 从链表头部移除元素
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|mut head| {
            self.head = head.next.take();
            head.value
        })
    }

    /// 从链表尾部移除元素，倒数第二个节点成为新的尾节点
    pub fn pop_back(&mut self) -> Option<T> {
        match self.len() {
            0 => None,
            1 => self.pop_front(),
            len => {
                let second_last = self.node_mut(len - 2)?;
                second_last.next.take().map(|node| node.value)
            }
        }
    }

    /// 删除 `position` 处的元素并返回
    pub fn remove(&mut self, position: usize) -> Result<T, ChainError> {
        if self.is_empty() {
            warn!("linear: remove at {} on an empty list", position);
            return Err(ChainError::Empty);
        }

        if position == 0 {
            return self.pop_front().ok_or(ChainError::Empty);
        }

        if let Some(prev) = self.node_mut(position - 1) {
            if let Some(target) = prev.next.take() {
                let Node { value, next } = *target;
                prev.next = next;
                trace!("linear: removed at {}", position);
                return Ok(value);
            }
        }

        let len = self.len();
        warn!("linear: remove at {} rejected, length is {}", position, len);
        Err(ChainError::OutOfRange { position, len })
    }

    /// 按值线性查找
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    /// 返回 `position` 处元素的引用
    pub fn get(&self, position: usize) -> Result<&T, ChainError> {
        self.iter()
            .nth(position)
            .ok_or_else(|| ChainError::OutOfRange {
                position,
                len: self.len(),
            })
    }

    /// 获取头部元素的引用，不移除
    pub fn peek_front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// 获取头部元素的可变引用
    pub fn peek_front_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    /// 将链表转换为迭代器
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// 将链表转换为可变迭代器
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
        }
    }

    // 下标为 index 的节点，不存在时返回 None
    fn node_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut current = self.head.as_deref_mut();
        for _ in 0..index {
            current = current?.next.as_deref_mut();
        }
        current
    }
}

/// 链表的迭代器
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

/// 链表的可变迭代器
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.value
        })
    }
}

impl<'a, T> IntoIterator for &'a LinearChain<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinearChain<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// 消费型迭代器
pub struct IntoIter<T>(LinearChain<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }
}

impl<T> IntoIterator for LinearChain<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<T> Default for LinearChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

// 只找一次尾部，之后逐个接上
impl<T> Extend<T> for LinearChain<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = &mut self.head;

        while let Some(ref mut node) = *tail {
            tail = &mut node.next;
        }

        for value in iter {
            let node = tail.insert(Box::new(Node { value, next: None }));
            tail = &mut node.next;
        }
    }
}

impl<T> FromIterator<T> for LinearChain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinearChain::new();
        list.extend(iter);
        list
    }
}

impl<T> From<Vec<T>> for LinearChain<T> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

// 逐个断开，避免长链递归析构
impl<T> Drop for LinearChain<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

impl<T: Debug> Debug for LinearChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
