use std::sync::Arc;

use ducks_core::{MiddlewareChain, Reducer, Store};
use ducks_logger::{LogElement, LoggerConfig, LoggerMiddleware};

#[derive(Clone, Debug, Default)]
struct AppState {
    counter: i32,
    theme: ThemeState,
}

#[derive(Clone, Debug, Default)]
struct ThemeState {
    is_dark: bool,
}

#[derive(Debug)]
enum AppAction {
    Increment,
    Decrement,
    Set(i32),
    ToggleTheme,
}

fn reducer() -> Reducer<AppState, AppAction> {
    Arc::new(|state: &mut AppState, action: AppAction| match action {
        AppAction::Increment => state.counter += 1,
        AppAction::Decrement => state.counter -= 1,
        AppAction::Set(value) => state.counter = value,
        AppAction::ToggleTheme => state.theme.is_dark = !state.theme.is_dark,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("debug"));

    println!("Ducks Logger Example");
    println!("====================");

    // Plain console logger with the default elements
    let console_logger = LoggerMiddleware::<AppState, AppAction>::default().enabled(true);

    // Second logger routed through the `log` facade, built from JSON
    let config = LoggerConfig::from_json(
        r#"{"enabled": true, "output": "log", "separator": " | ", "elements": ["date", "library_name"]}"#,
    )?;
    let facade_logger = LoggerMiddleware::<AppState, AppAction>::with_config(config)?.with_elements(vec![
        LogElement::Date,
        LogElement::LibraryName,
        LogElement::custom(|action: &AppAction, state: Option<&AppState>| {
            let counter = state.map(|s| s.counter).unwrap_or_default();
            format!("{:?} (counter before: {})", action, counter)
        }),
    ]);

    let mut chain = MiddlewareChain::<AppState, AppAction>::new();
    chain.add(Arc::new(console_logger));
    chain.add(Arc::new(facade_logger));

    let store = Store::new(AppState::default(), reducer(), chain);

    let actions = vec![
        AppAction::Increment,
        AppAction::ToggleTheme,
        AppAction::Set(42),
        AppAction::Decrement,
    ];

    for action in actions {
        store.dispatch(action);
    }

    println!("Final state: {:?}", store.state());
    Ok(())
}
