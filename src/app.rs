//! Todo Frontend App
//!
//! Root component: owns the list state and re-fetches it on every reload.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{NewTodoForm, TodoList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::Todo;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let (todos, set_todos) = signal(Vec::<Todo>::new());
    let (loading, set_loading) = signal(true);
    let (load_failed, set_load_failed) = signal(false);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let ctx = AppContext::new((reload_trigger, set_reload_trigger), config);
    provide_context(ctx);

    // Load todos on mount and after every mutation
    Effect::new(move |_| {
        let generation = reload_trigger.get();
        let config = ctx.config();
        log::debug!("Loading todos, generation={}", generation);
        spawn_local(async move {
            let result = api::list_todos(&config).await;
            if !ctx.is_current(generation) {
                log::debug!("Dropping stale list from generation {}", generation);
                return;
            }
            set_loading.set(false);
            match result {
                Ok(loaded) => {
                    set_load_failed.set(false);
                    set_todos.set(loaded);
                }
                Err(e) => {
                    log::error!("Error fetching TODOs: {}", e);
                    set_todos.set(Vec::new());
                    set_load_failed.set(true);
                }
            }
        });
    });

    view! {
        <main class="container">
            <h1>"TODO List"</h1>

            <section class="create-todo">
                <h2>"Create New TODO"</h2>
                <NewTodoForm />
            </section>

            <section class="todos">
                <h2>"Your TODOs"</h2>
                <TodoList todos=todos loading=loading load_failed=load_failed />
            </section>
        </main>
    }
}
