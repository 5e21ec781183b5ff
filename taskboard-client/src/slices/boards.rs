/// Boards slice: a normalized store of board trees
///
/// Boards live in one entity table keyed by id; the ordered list view and
/// the current-selection view are computed from it. Every fulfilled
/// mutation therefore merges in exactly one place, and a task is placed in
/// exactly the column its authoritative `columnId` names — it is removed
/// from any other column of that board in the same merge.

use std::collections::HashMap;

use taskboard_shared::models::board::{Board, BoardDetail};
use taskboard_shared::models::column::{Column, ColumnDetail};
use taskboard_shared::models::task::TaskDetail;
use uuid::Uuid;

/// Boards slice state
#[derive(Debug, Default)]
pub struct BoardsState {
    entities: HashMap<Uuid, BoardDetail>,
    order: Vec<Uuid>,
    current: Option<Uuid>,

    /// A request is in flight
    pub loading: bool,

    /// Last error message, verbatim from the server
    pub error: Option<String>,
}

impl BoardsState {
    /// The board list view, in server order
    pub fn list(&self) -> Vec<&BoardDetail> {
        self.order
            .iter()
            .filter_map(|id| self.entities.get(id))
            .collect()
    }

    /// One board by id
    pub fn board(&self, id: Uuid) -> Option<&BoardDetail> {
        self.entities.get(&id)
    }

    /// The current-selection view
    pub fn current_board(&self) -> Option<&BoardDetail> {
        self.current.and_then(|id| self.entities.get(&id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Successful board results, one per server mutation
#[derive(Debug, Clone)]
pub enum BoardsEvent {
    BoardsFetched(Vec<BoardDetail>),
    BoardFetched(BoardDetail),
    BoardCreated(BoardDetail),
    /// The server returns the bare row here; only its scalar fields merge
    BoardUpdated(Board),
    BoardDeleted(Uuid),
    ColumnAdded { board_id: Uuid, column: Column },
    ColumnRenamed { board_id: Uuid, column: Column },
    ColumnDeleted { board_id: Uuid, column_id: Uuid },
    TaskAdded { board_id: Uuid, task: TaskDetail },
    TaskUpdated { board_id: Uuid, task: TaskDetail },
    TaskMoved { board_id: Uuid, task: TaskDetail },
    TaskDeleted { board_id: Uuid, task_id: Uuid },
    MemberInvited(BoardDetail),
    MemberRemoved(BoardDetail),
}

/// Boards slice actions
#[derive(Debug, Clone)]
pub enum BoardsAction {
    Pending,
    Fulfilled(BoardsEvent),
    Rejected { message: String },
    BoardSelected(Uuid),
    SelectionCleared,
}

/// Pure reducer for the boards slice
pub fn reduce(state: &mut BoardsState, action: BoardsAction) {
    match action {
        BoardsAction::Pending => {
            state.loading = true;
            state.error = None;
        }
        BoardsAction::Rejected { message } => {
            state.loading = false;
            state.error = Some(message);
        }
        BoardsAction::BoardSelected(id) => {
            state.current = Some(id);
        }
        BoardsAction::SelectionCleared => {
            state.current = None;
        }
        BoardsAction::Fulfilled(event) => {
            state.loading = false;
            state.error = None;
            apply(state, event);
        }
    }
}

fn apply(state: &mut BoardsState, event: BoardsEvent) {
    match event {
        BoardsEvent::BoardsFetched(boards) => {
            state.entities.clear();
            state.order.clear();
            for board in boards {
                state.order.push(board.id);
                state.entities.insert(board.id, board);
            }
            if let Some(current) = state.current {
                if !state.entities.contains_key(&current) {
                    state.current = None;
                }
            }
        }
        BoardsEvent::BoardFetched(board)
        | BoardsEvent::BoardCreated(board)
        | BoardsEvent::MemberInvited(board)
        | BoardsEvent::MemberRemoved(board) => {
            upsert_board(state, board);
        }
        BoardsEvent::BoardUpdated(board) => {
            if let Some(detail) = state.entities.get_mut(&board.id) {
                detail.board = board;
            }
        }
        BoardsEvent::BoardDeleted(board_id) => {
            state.entities.remove(&board_id);
            state.order.retain(|id| *id != board_id);
            if state.current == Some(board_id) {
                state.current = None;
            }
        }
        BoardsEvent::ColumnAdded { board_id, column } => {
            if let Some(detail) = state.entities.get_mut(&board_id) {
                detail.columns.push(ColumnDetail {
                    column,
                    tasks: Vec::new(),
                });
            }
        }
        BoardsEvent::ColumnRenamed { board_id, column } => {
            if let Some(detail) = state.entities.get_mut(&board_id) {
                if let Some(existing) = detail.columns.iter_mut().find(|c| c.id == column.id) {
                    existing.column = column;
                }
            }
        }
        BoardsEvent::ColumnDeleted {
            board_id,
            column_id,
        } => {
            if let Some(detail) = state.entities.get_mut(&board_id) {
                detail.columns.retain(|c| c.id != column_id);
            }
        }
        BoardsEvent::TaskAdded { board_id, task }
        | BoardsEvent::TaskUpdated { board_id, task }
        | BoardsEvent::TaskMoved { board_id, task } => {
            if let Some(detail) = state.entities.get_mut(&board_id) {
                place_task(detail, task);
            }
        }
        BoardsEvent::TaskDeleted { board_id, task_id } => {
            if let Some(detail) = state.entities.get_mut(&board_id) {
                for column in &mut detail.columns {
                    column.tasks.retain(|t| t.id != task_id);
                }
            }
        }
    }
}

fn upsert_board(state: &mut BoardsState, board: BoardDetail) {
    let id = board.id;
    if !state.entities.contains_key(&id) {
        state.order.push(id);
    }
    state.entities.insert(id, board);
}

/// Places a task in the column its `columnId` names
///
/// Same column: replaced in position. Different column: removed from
/// wherever it was and appended to the target. A task can never appear in
/// two columns after a merge.
fn place_task(board: &mut BoardDetail, task: TaskDetail) {
    let target = task.column_id;
    let task_id = task.id;

    for column in &mut board.columns {
        if column.id != target {
            column.tasks.retain(|t| t.id != task_id);
        }
    }

    if let Some(column) = board.columns.iter_mut().find(|c| c.id == target) {
        match column.tasks.iter_mut().find(|t| t.id == task_id) {
            Some(existing) => *existing = task,
            None => column.tasks.push(task),
        }
    }
}
