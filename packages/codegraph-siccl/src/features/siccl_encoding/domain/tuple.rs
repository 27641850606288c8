//! SICCL output tuple
use serde::{Deserialize, Serialize};
use std::fmt;

/// `(caller, callee, variable, mutex)` ids
///
/// Serializes as a 4-element array, the shape the program synthesizer
/// consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "[u32; 4]", from = "[u32; 4]")]
pub struct SicclTuple {
    pub caller: u32,
    pub callee: u32,
    pub variable: u32,
    pub mutex: u32,
}

impl SicclTuple {
    pub fn new(caller: u32, callee: u32, variable: u32, mutex: u32) -> Self {
        Self {
            caller,
            callee,
            variable,
            mutex,
        }
    }

    pub fn as_array(&self) -> [u32; 4] {
        [self.caller, self.callee, self.variable, self.mutex]
    }
}

impl From<SicclTuple> for [u32; 4] {
    fn from(tuple: SicclTuple) -> Self {
        tuple.as_array()
    }
}

impl From<[u32; 4]> for SicclTuple {
    fn from([caller, callee, variable, mutex]: [u32; 4]) -> Self {
        Self::new(caller, callee, variable, mutex)
    }
}

impl fmt::Display for SicclTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.caller, self.callee, self.variable, self.mutex
        )
    }
}
