use std::fmt::{self, Debug};

use log::trace;

/// 环形链表中的节点，`next` 是节点表中的下标而不是指针
struct Node<T> {
    value: T,
    next: usize,
}

/// 单向环形链表
///
/// 所有节点都放在一张紧凑的节点表里，由链表独占；尾节点的 `next`
/// 等于头节点的下标，从而闭合成环，不需要循环引用。
/// 遍历一律以“回到头节点”作为终止条件。
pub struct CircularChain<T> {
    nodes: Vec<Node<T>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> CircularChain<T> {
    /// 创建一个空链表
    pub fn new() -> Self {
        CircularChain {
            nodes: Vec::new(),
            head: None,
            tail: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// 从头节点出发绕一圈计数
    pub fn len(&self) -> usize {
        let Some(head) = self.head else {
            return 0;
        };

        let mut count = 0;
        let mut current = head;
        loop {
            count += 1;
            current = self.nodes[current].next;
            if current == head {
                break;
            }
        }
        count
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// 在尾部添加元素；空链表时新节点指向自己
    pub fn push_back(&mut self, value: T) {
        let index = self.nodes.len();
        match (self.head, self.tail) {
            (Some(head), Some(tail)) => {
                self.nodes.push(Node { value, next: head });
                self.nodes[tail].next = index;
                self.tail = Some(index);
            }
            _ => self.push_first(value),
        }
        trace!("circular: pushed to back at slot {}", index);
    }

    /// 在头部添加元素，尾节点改为指向新的头节点
    pub fn push_front(&mut self, value: T) {
        let index = self.nodes.len();
        match (self.head, self.tail) {
            (Some(head), Some(tail)) => {
                self.nodes.push(Node { value, next: head });
                self.nodes[tail].next = index;
                self.head = Some(index);
            }
            _ => self.push_first(value),
        }
        trace!("circular: pushed to front at slot {}", index);
    }

    /// 移除头部元素，尾节点重新指向新的头节点
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        let next = self.nodes[head].next;

        if next == head {
            self.head = None;
            self.tail = None;
        } else {
            let last = self.predecessor(head);
            self.nodes[last].next = next;
            self.head = Some(next);
        }

        Some(self.release(head))
    }

    /// 移除尾部元素，倒数第二个节点成为新的尾节点并指回头节点
    pub fn pop_back(&mut self) -> Option<T> {
        let head = self.head?;
        let tail = self.tail?;

        if head == tail {
            self.head = None;
            self.tail = None;
        } else {
            let second_last = self.predecessor(tail);
            self.nodes[second_last].next = head;
            self.tail = Some(second_last);
        }

        Some(self.release(tail))
    }

    /// 按值查找，单元素链表也会被检查一次
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.head.map(|head| &self.nodes[head].value)
    }

    pub fn peek_back(&self) -> Option<&T> {
        self.tail.map(|tail| &self.nodes[tail].value)
    }

    /// 头指针沿环前进一步，原来的头节点变为尾节点
    pub fn rotate(&mut self) {
        if let Some(head) = self.head {
            self.tail = Some(head);
            self.head = Some(self.nodes[head].next);
        }
    }

    /// 检查环是否闭合：从头节点走 `len()` 步恰好回到头节点，
    /// 且尾节点的后继就是头节点
    pub fn is_closed(&self) -> bool {
        match (self.head, self.tail) {
            (None, None) => self.nodes.is_empty(),
            (Some(head), Some(tail)) => {
                let len = self.len();
                let mut current = head;
                for _ in 0..len {
                    current = self.nodes[current].next;
                }
                current == head && self.nodes[tail].next == head && len == self.nodes.len()
            }
            _ => false,
        }
    }

    /// 从头节点开始绕一圈的迭代器
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            head: self.head.unwrap_or_default(),
            current: self.head,
        }
    }

    fn push_first(&mut self, value: T) {
        let index = self.nodes.len();
        self.nodes.push(Node { value, next: index });
        self.head = Some(index);
        self.tail = Some(index);
    }

    // 环上指向 target 的那个节点
    fn predecessor(&self, target: usize) -> usize {
        let mut current = target;
        while self.nodes[current].next != target {
            current = self.nodes[current].next;
        }
        current
    }

    // 已从环上摘下的节点移出节点表；表中最后一个节点被挪到空位，
    // 指向它的下标随之更新
    fn release(&mut self, index: usize) -> T {
        let last = self.nodes.len() - 1;
        if index != last {
            for node in self.nodes.iter_mut() {
                if node.next == last {
                    node.next = index;
                }
            }
            if self.head == Some(last) {
                self.head = Some(index);
            }
            if self.tail == Some(last) {
                self.tail = Some(index);
            }
        }
        trace!("circular: released slot {}", index);
        self.nodes.swap_remove(index).value
    }
}

/// 环形链表的迭代器，回到头节点即结束
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    head: usize,
    current: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.current?;
        let node = &self.nodes[index];
        self.current = if node.next == self.head {
            None
        } else {
            Some(node.next)
        };
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a CircularChain<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for CircularChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for CircularChain<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for CircularChain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = CircularChain::new();
        list.extend(iter);
        list
    }
}

impl<T> From<Vec<T>> for CircularChain<T> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T: Debug> Debug for CircularChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(list: &CircularChain<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_single_element_points_to_itself() {
        let mut list = CircularChain::new();
        list.push_back(10);

        assert_eq!(list.len(), 1);
        assert!(list.contains(&10));
        assert!(list.is_closed());
        assert_eq!(list.peek_front(), list.peek_back());
    }

    #[test]
    fn test_push_back_and_front() {
        let mut list = CircularChain::new();
        list.push_back(10);
        list.push_back(20);
        list.push_back(30);
        list.push_front(5);

        assert_eq!(items(&list), vec![5, 10, 20, 30]);
        assert_eq!(list.len(), 4);
        assert_eq!(list.peek_back(), Some(&30));
        assert!(list.is_closed());
    }

    #[test]
    fn test_pop_front_relinks_tail() {
        let mut list = CircularChain::from(vec![5, 10, 20, 30]);

        assert_eq!(list.pop_front(), Some(5));
        assert_eq!(items(&list), vec![10, 20, 30]);
        assert!(list.is_closed());

        assert_eq!(list.pop_front(), Some(10));
        assert_eq!(list.pop_front(), Some(20));
        assert_eq!(list.pop_front(), Some(30));
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());
        assert!(list.is_closed());
    }

    #[test]
    fn test_pop_back() {
        let mut list = CircularChain::from(vec![5, 10, 20, 30]);

        assert_eq!(list.pop_back(), Some(30));
        assert_eq!(items(&list), vec![5, 10, 20]);
        assert_eq!(list.peek_back(), Some(&20));
        assert!(list.is_closed());

        assert_eq!(list.pop_back(), Some(20));
        assert_eq!(list.pop_back(), Some(10));
        assert_eq!(list.pop_back(), Some(5));
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_mixed_mutations_keep_ring_closed() {
        let mut list = CircularChain::new();
        for i in 0..8 {
            if i % 2 == 0 {
                list.push_back(i);
            } else {
                list.push_front(i);
            }
            assert!(list.is_closed());
        }
        assert_eq!(items(&list), vec![7, 5, 3, 1, 0, 2, 4, 6]);

        list.pop_back();
        assert!(list.is_closed());
        list.pop_front();
        assert!(list.is_closed());
        list.rotate();
        assert!(list.is_closed());
        list.pop_front();
        assert!(list.is_closed());

        assert_eq!(items(&list), vec![1, 0, 2, 4, 5]);
    }

    #[test]
    fn test_rotate() {
        let mut list = CircularChain::from(vec![1, 2, 3]);
        list.rotate();
        assert_eq!(items(&list), vec![2, 3, 1]);
        assert_eq!(list.peek_back(), Some(&1));

        list.push_back(4);
        assert_eq!(items(&list), vec![2, 3, 1, 4]);
    }

    #[test]
    fn test_contains() {
        let list = CircularChain::from(vec![1, 2, 3]);
        assert!(list.contains(&3));
        assert!(!list.contains(&4));

        let empty: CircularChain<i32> = CircularChain::new();
        assert!(!empty.contains(&1));
    }

    #[test]
    fn test_clear() {
        let mut list = CircularChain::from(vec![1, 2, 3]);
        list.clear();
        assert!(list.is_empty());
        assert!(list.is_closed());
        list.push_front(7);
        assert_eq!(format!("{:?}", list), "[7]");
    }
}
