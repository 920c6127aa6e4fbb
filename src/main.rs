use anyhow::Context;
use restaurant_menu_rust::config::load_settings;
use restaurant_menu_rust::menu::AppState;
use restaurant_menu_rust::router::create_app_router;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = load_settings()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .init();

    // One process is one menu session
    let state = Arc::new(match settings.assets_dir {
        Some(dir) => AppState::with_assets_dir(dir),
        None => AppState::new(),
    });

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    let listener = tokio::net::TcpListener::bind(&settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr))?;
    info!(addr = %settings.bind_addr, "server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use restaurant_menu_rust::mcp::handlers::handle_tool_call;
    use restaurant_menu_rust::mcp::models::{ADD_DISH_TOOL_NAME, REMOVE_DISH_TOOL_NAME};
    use restaurant_menu_rust::menu::{AppState, CourseType};
    use serde_json::json;
    use std::path::PathBuf;

    #[test]
    fn test_tool_calls_share_session_menu() {
        let state = AppState::with_assets_dir(PathBuf::from("assets"));

        for (course, name) in [("Main", "Soup"), ("Starter", "Bread"), ("Side", "Chips")] {
            let args = json!({
                "courseType": course,
                "dishName": name,
                "dishDescription": "House special",
                "dishPrice": "10"
            });
            handle_tool_call(&state, ADD_DISH_TOOL_NAME, args).expect("Tool call failed");
        }

        handle_tool_call(&state, REMOVE_DISH_TOOL_NAME, json!({ "id": 2 }))
            .expect("Tool call failed");

        let menu = state.menu();
        let ids: Vec<u64> = menu.snapshot().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(menu.snapshot()[1].course_type, CourseType::Side);
        assert_eq!(menu.next_id(), 4);
    }
}
