use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct UserPhone(i64);

impl UserPhone {
    pub fn new(phone: impl Into<i64>) -> Self {
        Self(phone.into())
    }
}
