use anyhow::Result;
use log::{info, warn};

use linked_chains::render::{render, render_circular, render_lines};
use linked_chains::{CircularChain, DemoConfig, DualModeChain, LinearChain};

/// 浏览历史，只用到栈模式的 add/remove/peek_front/is_empty
struct History {
    pages: DualModeChain<String>,
}

impl History {
    fn new() -> Self {
        History {
            pages: DualModeChain::stack(),
        }
    }

    fn visit(&mut self, url: &str) {
        self.pages.add(url.to_string());
    }

    fn back(&mut self) -> Option<String> {
        self.pages.remove()
    }

    fn current(&self) -> Option<&String> {
        self.pages.peek_front()
    }

    fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// 从最近访问的页面开始列出
    fn listing(&self) -> String {
        render_lines(&self.pages)
    }
}

fn linear_demo(config: &DemoConfig) {
    let mut list: LinearChain<i64> = config.values.iter().copied().collect();
    println!("Linked list: {}", render(&list, &config.separator));

    for element in &list {
        println!("  {}", element);
    }

    list.push_front(0);
    if let Err(e) = list.insert(99, list.len() + 1) {
        warn!("{}", e);
    }
    if let Ok(removed) = list.remove(1) {
        println!("Removed at position 1: {}", removed);
    }
    match list.get(1) {
        Ok(value) => println!("Element at position 1: {}", value),
        Err(e) => println!("{}", e),
    }
    println!(
        "After edits: {} (size {})",
        render(&list, &config.separator),
        list.len()
    );
}

fn circular_demo(config: &DemoConfig) {
    let mut list: CircularChain<i64> = config.values.iter().map(|v| v * 10).collect();
    println!("Circular list: {}", render_circular(&list, &config.separator));

    list.push_front(5);
    println!("After adding 5 at the start: {}", render_circular(&list, &config.separator));

    if let Some(value) = list.pop_back() {
        println!("Element {} removed.", value);
    }
    if let Some(value) = list.pop_front() {
        println!("Element {} removed.", value);
    }
    println!("Now: {}", render_circular(&list, &config.separator));

    while list.pop_front().is_some() {}
    println!("After removing all: {}", render_circular(&list, &config.separator));
}

fn dual_mode_demo(config: &DemoConfig) {
    let mut chain = DualModeChain::new(config.mode);
    chain.extend(config.values.iter().copied());
    chain.remove();
    chain.remove();

    match chain.peek_front() {
        Some(value) => println!("{}: the front element is {}", chain.mode(), value),
        None => println!("{}: there is no element", chain.mode()),
    }
}

fn history_demo() {
    let mut history = History::new();
    for url in ["https://example.org", "https://example.org/docs", "https://example.org/docs/list"] {
        history.visit(url);
    }
    println!("History:\n{}", history.listing());

    if let Some(page) = history.back() {
        println!("Back from {}", page);
    }
    match history.current() {
        Some(page) => println!("Current page: {}", page),
        None => println!("There is no page to show."),
    }

    while history.back().is_some() {}
    if history.is_empty() {
        println!("No more pages to go back to.");
    }
}

fn main() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        unsafe {
            std::env::set_var("RUST_LOG", "info");
        }
    }
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    info!("Starting demo in {} mode with {} values", config.mode, config.values.len());

    linear_demo(&config);
    circular_demo(&config);
    dual_mode_demo(&config);
    history_demo();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_back_and_current() {
        let mut history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.current(), None);
        assert_eq!(history.back(), None);

        history.visit("a.com");
        history.visit("b.com");
        assert_eq!(history.listing(), "b.com\na.com");

        assert_eq!(history.back(), Some("b.com".to_string()));
        assert_eq!(history.current().map(String::as_str), Some("a.com"));
    }
}
