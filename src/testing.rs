//! Test Doubles
//!
//! In-memory backend speaking the admin REST contract, plus a notifier that
//! remembers what it was asked to show.

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::cell::RefCell;
use std::rc::Rc;

use crate::api::{ApiRequest, ApiResponse, Method, Transport};
use crate::error::ApiError;
use crate::notify::{Notice, Notifier};
use crate::resource::ResourceKind;

#[derive(Default)]
struct FakeState {
    requests: Vec<ApiRequest>,
    articles: Vec<Value>,
    products: Vec<Value>,
    next_id: u32,
    offline: bool,
    canned: Option<ApiResponse>,
}

impl FakeState {
    fn collection_mut(&mut self, name: &str) -> Option<&mut Vec<Value>> {
        match name {
            "articles" => Some(&mut self.articles),
            "products" => Some(&mut self.products),
            _ => None,
        }
    }

    fn route(&mut self, request: &ApiRequest) -> ApiResponse {
        let path = request.path.as_str();

        if request.method == Method::Get {
            let name = path.trim_start_matches('/');
            return match self.collection_mut(name) {
                Some(records) => {
                    let mut body = Map::new();
                    body.insert(name.to_string(), Value::Array(records.clone()));
                    response(200, &Value::Object(body).to_string())
                }
                None => response(404, ""),
            };
        }

        let Some(rest) = path.strip_prefix("/admin/") else {
            return response(404, "");
        };
        let mut parts = rest.splitn(2, '/');
        let name = parts.next().unwrap_or_default().to_string();
        let id: Option<u64> = parts.next().and_then(|s| s.parse().ok());

        self.next_id += 1;
        let assigned = self.next_id;
        let Some(records) = self.collection_mut(&name) else {
            return response(404, "");
        };
        let position = id.and_then(|id| records.iter().position(|r| r["id"] == json!(id)));

        match (request.method, id, position) {
            (Method::Post, None, _) => {
                let mut record = request.body.clone().unwrap_or_else(|| json!({}));
                record["id"] = json!(assigned);
                records.push(record);
                response(201, r#"{"message": "created"}"#)
            }
            (Method::Put, Some(_), Some(index)) => {
                if let (Some(existing), Some(Value::Object(fields))) =
                    (records[index].as_object_mut(), request.body.clone())
                {
                    existing.extend(fields);
                }
                response(200, r#"{"message": "updated"}"#)
            }
            (Method::Delete, Some(_), Some(index)) => {
                records.remove(index);
                response(200, r#"{"message": "deleted"}"#)
            }
            _ => response(404, r#"{"message": "not found"}"#),
        }
    }
}

/// Response with an empty status text
pub fn response(status: u16, body: &str) -> ApiResponse {
    ApiResponse { status, status_text: String::new(), body: body.to_string() }
}

/// Cheap to clone; clones share one backend
#[derive(Clone, Default)]
pub struct FakeBackend {
    state: Rc<RefCell<FakeState>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record as if the backend already had it
    pub fn insert(&self, kind: ResourceKind, record: Value) {
        let mut state = self.state.borrow_mut();
        if let Some(records) = state.collection_mut(kind.collection_key()) {
            records.push(record);
        }
    }

    /// Every following request is answered with `status`
    pub fn fail_with(&self, status: u16) {
        self.state.borrow_mut().canned = Some(response(status, ""));
    }

    /// Every following request is answered with this exact response
    pub fn respond_raw(&self, status: u16, body: &str) {
        self.state.borrow_mut().canned = Some(response(status, body));
    }

    pub fn go_offline(&self) {
        self.state.borrow_mut().offline = true;
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.borrow().requests.clone()
    }

    pub fn clear_requests(&self) {
        self.state.borrow_mut().requests.clear();
    }
}

#[async_trait(?Send)]
impl Transport for FakeBackend {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut state = self.state.borrow_mut();
        state.requests.push(request.clone());
        if state.offline {
            return Err(ApiError::Network("Failed to fetch".to_string()));
        }
        if let Some(canned) = state.canned.clone() {
            return Ok(canned);
        }
        Ok(state.route(&request))
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    notices: Rc<RefCell<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notices.borrow().iter().map(ToString::to_string).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.borrow_mut().push(*notice);
    }
}
