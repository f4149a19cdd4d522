//! Remote API Bindings
//!
//! Frontend bindings to the hosted todo collection, one function per endpoint.
//! Failures come back as plain strings and are the caller's problem to log.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::models::Todo;

/// Hosted collection the client syncs against.
const BASE_URL: &str = "https://dummyjson.com";

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct CreateTodoArgs<'a> {
    pub text: &'a str,
    pub completed: bool,
}

#[derive(Serialize)]
struct UpdateTodoArgs {
    completed: bool,
}

/// Collection responses wrap the list under a `todos` key.
#[derive(Deserialize)]
struct TodosResponse {
    todos: Vec<Todo>,
}

// ========================
// Endpoints
// ========================

pub async fn list_todos() -> Result<Vec<Todo>, String> {
    let resp = Request::get(&format!("{}/todos", BASE_URL))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let body: TodosResponse = resp.json().await.map_err(|e| e.to_string())?;
    Ok(body.todos)
}

/// Create a todo server-side. The response echoes the full collection with
/// the new item last; only that item is returned.
pub async fn create_todo(args: &CreateTodoArgs<'_>) -> Result<Todo, String> {
    let resp = Request::post(&format!("{}/todos", BASE_URL))
        .json(args)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let body: TodosResponse = resp.json().await.map_err(|e| e.to_string())?;
    body.todos
        .into_iter()
        .last()
        .ok_or_else(|| "create response carried no todos".to_string())
}

/// Push a todo's completed flag to the server. The response body is not used.
pub async fn update_todo(id: u32, completed: bool) -> Result<(), String> {
    Request::put(&format!("{}/todos/{}", BASE_URL, id))
        .json(&UpdateTodoArgs { completed })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    Ok(())
}

pub async fn delete_todo(id: u32) -> Result<(), String> {
    Request::delete(&format!("{}/todos/{}", BASE_URL, id))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    Ok(())
}
