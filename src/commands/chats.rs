//! `navroute chats` - replay the chat-activity LRU cache demo

use serde::Serialize;

use crate::commands::dispatch::CommandContext;
use navroute_core::cache::ChatActivity;
use navroute_core::error::Result;

#[derive(Debug, Clone, Copy)]
enum Step {
    Put(u64, &'static str),
    Get(u64),
}

const DEMO: &[Step] = &[
    Step::Put(101, "Hello!"),
    Step::Put(102, "Hi there"),
    Step::Put(103, "Good morning"),
    Step::Get(101),
    Step::Put(104, "New chat started"),
];

/// Steps after which the active-chat listing is shown
fn is_checkpoint(index: usize) -> bool {
    index >= 2
}

#[derive(Debug, Serialize)]
struct StepReport {
    action: &'static str,
    chat_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    evicted: Option<u64>,
    active: Vec<u64>,
}

pub fn execute(ctx: &CommandContext, capacity: Option<usize>) -> Result<()> {
    let capacity = capacity.unwrap_or(ctx.config.cache.capacity);
    let mut cache = ChatActivity::new(capacity)?;
    let mut reports = Vec::with_capacity(DEMO.len());

    for (index, step) in DEMO.iter().enumerate() {
        let report = match *step {
            Step::Put(chat_id, message) => {
                let evicted = cache.put(chat_id, message.to_string());
                StepReport {
                    action: "put",
                    chat_id,
                    message: Some(message.to_string()),
                    evicted: evicted.map(|(id, _)| id),
                    active: active(&cache),
                }
            }
            Step::Get(chat_id) => {
                let message = cache.get(&chat_id).cloned();
                StepReport {
                    action: "get",
                    chat_id,
                    message,
                    evicted: None,
                    active: active(&cache),
                }
            }
        };

        if !ctx.is_json() && is_checkpoint(index) {
            print_active(&report.active);
        }
        reports.push(report);
    }

    if ctx.is_json() {
        let output = serde_json::json!({
            "capacity": capacity,
            "steps": reports,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}

fn active(cache: &ChatActivity) -> Vec<u64> {
    cache.keys_most_recent_first().into_iter().copied().collect()
}

fn print_active(active: &[u64]) {
    let ids: Vec<String> = active.iter().map(|id| id.to_string()).collect();
    println!("Active Chats (Most -> Least Recent): {}", ids.join(" "));
}
