use serde::Serialize;
use serde_json::Value;

use crate::components::gravatar_status::{self, GravatarAction};

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_user: Option<CurrentUser>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gravatar_status: Option<gravatar_status::State>,
}

#[derive(Clone, Debug, PartialEq, strum_macros::IntoStaticStr)]
pub enum AppAction {
    CurrentUserIdSet(u64),
    Gravatar(GravatarAction),
    Serialize,
    Deserialize(Value),
}

impl AppState {
    pub fn reduce(&mut self, action: AppAction) {
        log::trace!("{}", <&'static str>::from(&action));
        match action {
            AppAction::CurrentUserIdSet(id) => {
                self.current_user.get_or_insert_with(Default::default).id = Some(id);
            }
            AppAction::Gravatar(action) => {
                let status = self
                    .current_user
                    .get_or_insert_with(Default::default)
                    .gravatar_status
                    .get_or_insert_with(Default::default);
                gravatar_status::reduce(&action, status);
            }
            AppAction::Serialize => {
                if let Some(status) = self.gravatar_status_mut() {
                    gravatar_status::reduce(&GravatarAction::Serialize, status);
                }
            }
            AppAction::Deserialize(value) => {
                *self = Self::from_persisted(&value);
            }
        }
    }

    fn gravatar_status_mut(&mut self) -> Option<&mut gravatar_status::State> {
        self.current_user.as_mut()?.gravatar_status.as_mut()
    }

    /// The tree as it should be written to storage
    pub fn to_persisted(&self) -> serde_json::Result<Value> {
        let mut persisted = self.clone();
        persisted.reduce(AppAction::Serialize);
        serde_json::to_value(&persisted)
    }

    /// Rebuild the tree from storage. Parts that don't match the expected
    /// shape are left uninitialized instead of failing the load.
    pub fn from_persisted(value: &Value) -> Self {
        let Some(user) = value.get("currentUser").filter(|u| u.is_object()) else {
            return Self::default();
        };
        let gravatar_status = user
            .get("gravatarStatus")
            .filter(|s| s.is_object())
            .map(|raw| {
                let mut status = gravatar_status::State::default();
                gravatar_status::reduce(&GravatarAction::Deserialize(raw.clone()), &mut status);
                status
            });
        Self {
            current_user: Some(CurrentUser {
                id: user.get("id").and_then(Value::as_u64),
                gravatar_status,
            }),
        }
    }
}
