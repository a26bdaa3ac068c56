//! 端末向けの通知・画面遷移

use hypernym_bench_common::{Navigator, Notification, Notifier, Route};

/// 通知を標準出力に表示する
#[derive(Debug, Default)]
pub struct ConsoleNotifier {
    pub history: Vec<Notification>,
}

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, notification: Notification) {
        let mark = if notification.is_destructive() { "✖" } else { "✔" };
        println!("{} {} - {}", mark, notification.title, notification.description);
        self.history.push(notification);
    }
}

/// 遷移先を表示して現在ルートを更新する
#[derive(Debug)]
pub struct ConsoleNavigator {
    pub current: Route,
}

impl ConsoleNavigator {
    pub fn new(start: Route) -> Self {
        Self { current: start }
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate(&mut self, route: Route) {
        println!("→ {} ({})", route.label(), route.path());
        self.current = route;
    }
}
