// ABOUTME: Test helper utilities providing canned Jira API response bodies
// ABOUTME: Shared by the wire-type tests and the mockito-backed client tests

use serde_json::json;

pub fn boards_body() -> serde_json::Value {
    json!({
        "maxResults": 50,
        "startAt": 0,
        "isLast": true,
        "values": [
            { "id": 1, "name": "Platform", "type": "scrum" },
            { "id": 2, "name": "Mobile", "type": "kanban" }
        ]
    })
}

pub fn search_body() -> serde_json::Value {
    json!({
        "startAt": 0,
        "maxResults": 50,
        "total": 2,
        "issues": [
            {
                "id": "10001",
                "key": "TASK-1",
                "fields": {
                    "summary": "Fix login flow",
                    "description": "Users get logged out on refresh",
                    "issuetype": { "name": "Bug" },
                    "status": { "name": "To Do" },
                    "assignee": { "displayName": "Alice Jones" }
                }
            },
            {
                "id": "10002",
                "key": "TASK-2",
                "fields": {
                    "summary": "Write onboarding docs",
                    "description": null,
                    "issuetype": { "name": "Task" },
                    "status": { "name": "In Progress" },
                    "assignee": null
                }
            }
        ]
    })
}

pub fn issue_body() -> serde_json::Value {
    json!({
        "id": "10001",
        "key": "TASK-1",
        "fields": {
            "summary": "Fix login flow",
            "description": "Users get logged out on refresh",
            "issuetype": { "name": "Bug" },
            "status": { "name": "To Do" },
            "assignee": { "displayName": "Alice Jones" }
        }
    })
}

pub fn transitions_body() -> serde_json::Value {
    json!({
        "expand": "transitions",
        "transitions": [
            { "id": "11", "name": "Start Progress", "to": { "name": "In Progress" } },
            { "id": "31", "name": "Close Issue", "to": { "name": "Closed" } }
        ]
    })
}

pub fn created_body() -> serde_json::Value {
    json!({
        "id": "10100",
        "key": "TASK-100",
        "self": "https://example.atlassian.net/rest/api/2/issue/10100"
    })
}
