/// Integration tests for the taskboard API
///
/// Each test drives the real router end-to-end over a fresh in-memory
/// database: registration and login, the board/column/task lifecycle,
/// membership, and notifications.

mod common;

use axum::http::StatusCode;
use common::{column_by_title, id_of, TestContext};
use serde_json::json;

#[tokio::test]
async fn register_and_login_roundtrip() {
    let ctx = TestContext::new().await.unwrap();

    let user = ctx.register_user("Ada", "a@x.com").await;
    assert_eq!(user["firstName"], "Ada");
    assert_eq!(user["email"], "a@x.com");
    assert!(user.get("passwordHash").is_none());
    assert!(user.get("password_hash").is_none());

    // Duplicate email is a 400 conflict
    let (status, body) = ctx
        .post(
            "/auth/register",
            json!({
                "firstName": "Ada",
                "lastName": "Tester",
                "email": "a@x.com",
                "password": "longenough1",
                "confirmPassword": "longenough1",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "User with this email already exists");

    // Correct credentials
    let (status, body) = ctx
        .post("/auth/login", json!({"email": "a@x.com", "password": "longenough1"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "a@x.com");

    // Wrong password and unknown email give the identical message
    let (status, body) = ctx
        .post("/auth/login", json!({"email": "a@x.com", "password": "wrongpassword"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid email or password");

    let (status, body) = ctx
        .post("/auth/login", json!({"email": "nobody@x.com", "password": "longenough1"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid email or password");
}

#[tokio::test]
async fn register_validation_reports_field_details() {
    let ctx = TestContext::new().await.unwrap();

    let (status, body) = ctx
        .post(
            "/auth/register",
            json!({
                "firstName": "A",
                "lastName": "B",
                "email": "not-an-email",
                "password": "short",
                "confirmPassword": "different",
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid input");

    let details = body["details"].as_array().expect("details array");
    assert!(!details.is_empty());
    let fields: Vec<&str> = details
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"email"));
    assert!(fields.contains(&"password"));
}

#[tokio::test]
async fn board_lifecycle_from_registration_to_done() {
    let ctx = TestContext::new().await.unwrap();

    let user = ctx.register_user("Ada", "a@x.com").await;
    let user_id = id_of(&user).to_string();

    // New board comes with the four default columns
    let board = ctx.create_board(&user_id, "Sprint").await;
    let board_id = id_of(&board).to_string();

    let titles: Vec<&str> = board["columns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["To Do", "In Progress", "Review", "Done"]);
    assert_eq!(board["ownerId"], user_id.as_str());
    assert_eq!(board["members"].as_array().unwrap().len(), 1);

    let done_id = id_of(column_by_title(&board, "Done")).to_string();

    // Appended column lands after the defaults
    let (status, body) = ctx
        .post("/columns", json!({"title": "Backlog", "boardId": board_id}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["column"]["order"], 4);
    let backlog_id = id_of(&body["column"]).to_string();

    // Create a task in Backlog, then move it to Done
    let (status, body) = ctx
        .post("/tasks", json!({"title": "Fix bug", "columnId": backlog_id}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let task_id = id_of(&body["task"]).to_string();

    let (status, body) = ctx
        .put(&format!("/tasks/{task_id}/move"), json!({"columnId": done_id}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["task"]["columnId"], done_id.as_str());

    // The board tree reflects the move: Backlog empty, Done holds the task
    let (status, body) = ctx.get(&format!("/boards/{board_id}")).await;
    assert_eq!(status, StatusCode::OK);
    let board = &body["board"];

    let backlog = column_by_title(board, "Backlog");
    assert_eq!(backlog["tasks"].as_array().unwrap().len(), 0);

    let done = column_by_title(board, "Done");
    let done_tasks = done["tasks"].as_array().unwrap();
    assert_eq!(done_tasks.len(), 1);
    assert_eq!(id_of(&done_tasks[0]), task_id);
}

#[tokio::test]
async fn board_list_requires_user_id() {
    let ctx = TestContext::new().await.unwrap();

    let (status, body) = ctx.get("/boards").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "User ID is required");

    let user = ctx.register_user("Ada", "a@x.com").await;
    let user_id = id_of(&user).to_string();
    ctx.create_board(&user_id, "Sprint").await;

    let (status, body) = ctx.get(&format!("/boards?userId={user_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["boards"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn create_board_requires_title_and_user() {
    let ctx = TestContext::new().await.unwrap();

    let (status, body) = ctx.post("/boards", json!({"description": "no title"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Title and user ID are required");

    // Empty title counts as missing
    let user = ctx.register_user("Ada", "a@x.com").await;
    let (status, body) = ctx
        .post("/boards", json!({"title": "", "userId": id_of(&user)}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Title and user ID are required");
}

#[tokio::test]
async fn unknown_ids_are_404() {
    let ctx = TestContext::new().await.unwrap();

    let missing = uuid::Uuid::new_v4();

    let (status, body) = ctx.get(&format!("/boards/{missing}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Board not found");

    let (status, body) = ctx
        .put(&format!("/tasks/{missing}"), json!({"title": "nope"}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Task not found");
}

#[tokio::test]
async fn membership_invite_and_removal() {
    let ctx = TestContext::new().await.unwrap();

    let owner = ctx.register_user("Ada", "owner@x.com").await;
    let invitee = ctx.register_user("Grace", "invitee@x.com").await;
    let board = ctx.create_board(id_of(&owner), "Shared").await;
    let board_id = id_of(&board).to_string();
    let invitee_id = id_of(&invitee).to_string();

    // Invite by email
    let (status, body) = ctx
        .post(
            &format!("/boards/{board_id}/members"),
            json!({"email": "invitee@x.com", "role": "member"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["board"]["members"].as_array().unwrap().len(), 2);

    // Inviting again conflicts and does not duplicate anything
    let (status, body) = ctx
        .post(
            &format!("/boards/{board_id}/members"),
            json!({"email": "invitee@x.com", "role": "member"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "User is already a member of this board");

    // Unknown email is a 404
    let (status, body) = ctx
        .post(
            &format!("/boards/{board_id}/members"),
            json!({"email": "stranger@x.com"}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");

    // Exactly one invitation notification
    let (status, body) = ctx
        .get(&format!("/notifications?userId={invitee_id}"))
        .await;
    assert_eq!(status, StatusCode::OK);
    let notifications = body["notifications"].as_array().unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0]["title"], "Board Invitation");
    assert_eq!(notifications[0]["read"], false);

    // Removal, and removal again, both succeed
    let (status, body) = ctx
        .delete(&format!("/boards/{board_id}/members?userId={invitee_id}"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["board"]["members"].as_array().unwrap().len(), 1);

    let (status, _) = ctx
        .delete(&format!("/boards/{board_id}/members?userId={invitee_id}"))
        .await;
    assert_eq!(status, StatusCode::OK);

    // Missing userId on removal is a 400
    let (status, body) = ctx
        .delete(&format!("/boards/{board_id}/members"))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "User ID is required");
}

#[tokio::test]
async fn assignment_and_move_emit_notifications() {
    let ctx = TestContext::new().await.unwrap();

    let owner = ctx.register_user("Ada", "owner@x.com").await;
    let assignee = ctx.register_user("Grace", "assignee@x.com").await;
    let board = ctx.create_board(id_of(&owner), "Sprint").await;
    let assignee_id = id_of(&assignee).to_string();

    let todo_id = id_of(column_by_title(&board, "To Do")).to_string();
    let done_id = id_of(column_by_title(&board, "Done")).to_string();

    let (status, body) = ctx
        .post(
            "/tasks",
            json!({
                "title": "Fix bug",
                "columnId": todo_id,
                "assigneeId": assignee_id,
                "tags": ["bug", "urgent"],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let task = &body["task"];
    assert_eq!(task["assignee"]["email"], "assignee@x.com");
    assert_eq!(task["tags"].as_array().unwrap().len(), 2);
    let task_id = id_of(task).to_string();

    let (_, body) = ctx
        .get(&format!("/notifications?userId={assignee_id}"))
        .await;
    let notifications = body["notifications"].as_array().unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0]["title"], "Task Assigned");

    // Moving the assigned task notifies about the move, newest first
    let (status, _) = ctx
        .put(&format!("/tasks/{task_id}/move"), json!({"columnId": done_id}))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = ctx
        .get(&format!("/notifications?userId={assignee_id}"))
        .await;
    let notifications = body["notifications"].as_array().unwrap();
    assert_eq!(notifications.len(), 2);
    assert_eq!(notifications[0]["title"], "Task Moved");
    let description = notifications[0]["description"].as_str().unwrap();
    assert!(description.contains("Fix bug"));
    assert!(description.contains("Done"));
    assert!(description.contains("Sprint"));
}

#[tokio::test]
async fn update_task_replaces_tags_and_unassigns_on_null() {
    let ctx = TestContext::new().await.unwrap();

    let owner = ctx.register_user("Ada", "owner@x.com").await;
    let assignee = ctx.register_user("Grace", "assignee@x.com").await;
    let board = ctx.create_board(id_of(&owner), "Sprint").await;
    let todo_id = id_of(column_by_title(&board, "To Do")).to_string();

    let (_, body) = ctx
        .post(
            "/tasks",
            json!({
                "title": "Tagged",
                "columnId": todo_id,
                "assigneeId": id_of(&assignee),
                "tags": ["a", "b"],
            }),
        )
        .await;
    let task_id = id_of(&body["task"]).to_string();

    // Tag list replaces the whole set
    let (status, body) = ctx
        .put(&format!("/tasks/{task_id}"), json!({"tags": ["c"]}))
        .await;
    assert_eq!(status, StatusCode::OK);
    let tags: Vec<&str> = body["task"]["tags"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(tags, ["c"]);
    // Assignment untouched by a tags-only update
    assert_eq!(body["task"]["assignee"]["email"], "assignee@x.com");

    // Explicit null unassigns
    let (status, body) = ctx
        .put(&format!("/tasks/{task_id}"), json!({"assigneeId": null}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["task"]["assigneeId"], serde_json::Value::Null);
    assert_eq!(body["task"]["assignee"], serde_json::Value::Null);
}

#[tokio::test]
async fn move_requires_column_id() {
    let ctx = TestContext::new().await.unwrap();

    let owner = ctx.register_user("Ada", "owner@x.com").await;
    let board = ctx.create_board(id_of(&owner), "Sprint").await;
    let todo_id = id_of(column_by_title(&board, "To Do")).to_string();

    let (_, body) = ctx
        .post("/tasks", json!({"title": "Stuck", "columnId": todo_id}))
        .await;
    let task_id = id_of(&body["task"]).to_string();

    let (status, body) = ctx.put(&format!("/tasks/{task_id}/move"), json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Column ID is required");
}

#[tokio::test]
async fn notifications_read_flow() {
    let ctx = TestContext::new().await.unwrap();

    let owner = ctx.register_user("Ada", "owner@x.com").await;
    let reader = ctx.register_user("Grace", "reader@x.com").await;
    let board = ctx.create_board(id_of(&owner), "Sprint").await;
    let reader_id = id_of(&reader).to_string();
    let todo_id = id_of(column_by_title(&board, "To Do")).to_string();

    // Generate a few notifications by assigning tasks
    for i in 0..3 {
        let (status, _) = ctx
            .post(
                "/tasks",
                json!({
                    "title": format!("Task {i}"),
                    "columnId": todo_id,
                    "assigneeId": reader_id,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = ctx.get(&format!("/notifications?userId={reader_id}")).await;
    let notifications = body["notifications"].as_array().unwrap().clone();
    assert_eq!(notifications.len(), 3);

    // Mark one read individually
    let first_id = id_of(&notifications[0]).to_string();
    let (status, body) = ctx
        .put(&format!("/notifications/{first_id}"), json!({"read": true}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notification"]["read"], true);

    // Batch-mark the rest
    let (status, body) = ctx
        .put("/notifications/mark-all-read", json!({"userId": reader_id}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, body) = ctx.get(&format!("/notifications?userId={reader_id}")).await;
    assert!(body["notifications"]
        .as_array()
        .unwrap()
        .iter()
        .all(|n| n["read"] == true));

    // Delete one
    let (status, body) = ctx.delete(&format!("/notifications/{first_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, body) = ctx.get(&format!("/notifications?userId={reader_id}")).await;
    assert_eq!(body["notifications"].as_array().unwrap().len(), 2);

    // Missing userId is rejected
    let (status, body) = ctx.get("/notifications").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "User ID is required");

    let (status, _) = ctx.put("/notifications/mark-all-read", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn deleting_a_board_removes_its_tree() {
    let ctx = TestContext::new().await.unwrap();

    let owner = ctx.register_user("Ada", "owner@x.com").await;
    let owner_id = id_of(&owner).to_string();
    let board = ctx.create_board(&owner_id, "Doomed").await;
    let board_id = id_of(&board).to_string();
    let todo_id = id_of(column_by_title(&board, "To Do")).to_string();

    ctx.post("/tasks", json!({"title": "Orphan", "columnId": todo_id}))
        .await;

    let (status, body) = ctx.delete(&format!("/boards/{board_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, _) = ctx.get(&format!("/boards/{board_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = ctx.get(&format!("/boards?userId={owner_id}")).await;
    assert_eq!(body["boards"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn health_endpoint_reports_connected_database() {
    let ctx = TestContext::new().await.unwrap();

    let (status, body) = ctx.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
}
