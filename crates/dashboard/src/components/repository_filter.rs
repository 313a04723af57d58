use dioxus::prelude::*;

/// Searchable multi-select for repositories with select-all/clear actions, a
/// selected-tag summary, and a backdrop that closes the dropdown on an
/// outside click.
#[component]
pub fn RepositoryFilter(
    repositories: Vec<String>,
    selected: Vec<String>,
    on_change: EventHandler<Vec<String>>,
) -> Element {
    let mut search = use_signal(String::new);
    let mut open = use_signal(|| false);

    let term = search().to_lowercase();
    let visible: Vec<String> = if term.is_empty() {
        repositories.clone()
    } else {
        repositories
            .iter()
            .filter(|repo| repo.to_lowercase().contains(&term))
            .cloned()
            .collect()
    };
    let all_visible_selected = !visible.is_empty() && visible.iter().all(|r| selected.contains(r));

    rsx! {
        div { class: "repository-filter",
            label { "Repositories:" }
            div { class: "repo-filter-container",
                if open() {
                    // Transparent backdrop; clicking outside the list closes it.
                    div { class: "filter-backdrop", onclick: move |_| open.set(false) }
                }
                div { class: "repo-filter-header",
                    input {
                        r#type: "text",
                        class: "repo-search-input",
                        placeholder: "Search...",
                        value: "{search}",
                        oninput: move |e| search.set(e.value()),
                        onfocusin: move |_| open.set(true),
                    }
                    button {
                        r#type: "button",
                        class: "toggle-btn",
                        onclick: move |_| {
                            let now_open = open();
                            open.set(!now_open);
                        },
                        if open() { "▲" } else { "▼" }
                    }
                }
                if open() {
                    div { class: "repo-list-container",
                        div { class: "repo-list-header",
                            button {
                                class: "select-all-btn",
                                onclick: {
                                    let visible = visible.clone();
                                    let selected = selected.clone();
                                    move |_| {
                                        if all_visible_selected {
                                            on_change.call(Vec::new());
                                        } else {
                                            let mut next = selected.clone();
                                            for repo in &visible {
                                                if !next.contains(repo) {
                                                    next.push(repo.clone());
                                                }
                                            }
                                            on_change.call(next);
                                        }
                                    }
                                },
                                if all_visible_selected { "Deselect all" } else { "Select all" }
                            }
                            if !selected.is_empty() {
                                button {
                                    class: "clear-btn",
                                    onclick: move |_| on_change.call(Vec::new()),
                                    "Clear"
                                }
                            }
                        }
                        div { class: "repo-list",
                            if visible.is_empty() {
                                div { class: "no-repos", "No matching repositories" }
                            }
                            for repo in visible.clone() {
                                {
                                    let checked = selected.contains(&repo);
                                    let selected = selected.clone();
                                    let name = repo.clone();
                                    rsx! {
                                        label { key: "{repo}", class: "repo-checkbox-label",
                                            input {
                                                r#type: "checkbox",
                                                class: "repo-checkbox",
                                                checked,
                                                onchange: move |_| {
                                                    let mut next = selected.clone();
                                                    if checked {
                                                        next.retain(|r| r != &name);
                                                    } else {
                                                        next.push(name.clone());
                                                    }
                                                    on_change.call(next);
                                                },
                                            }
                                            span { class: "repo-name", "{repo}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                if !selected.is_empty() {
                    div { class: "selected-repos",
                        span { class: "selected-count", "{selected.len()} selected" }
                        div { class: "selected-tags",
                            for repo in selected.iter().take(3) {
                                span { key: "{repo}", class: "selected-tag", "{repo}" }
                            }
                            if selected.len() > 3 {
                                span { class: "selected-tag more", "+{selected.len() - 3}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
