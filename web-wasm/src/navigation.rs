//! leptos_router を使った画面遷移

use hypernym_bench_common::{Navigator, Route};
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&mut self, route: Route) {
        log::debug!("navigate: {}", route.path());
        (self.navigate)(route.path(), NavigateOptions::default());
    }
}

/// `<Router>` 配下のコンポーネントから呼ぶ
pub fn use_navigator() -> RouterNavigator<impl Fn(&str, NavigateOptions) + Clone + 'static> {
    RouterNavigator {
        navigate: use_navigate(),
    }
}
