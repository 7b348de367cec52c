//! maps wire method calls onto an [`Agent`]
//!
//! The host addresses the agent through a single capability named `Agent`,
//! but calls its methods by their bare names, `initialize` and `play`. Some
//! servers register methods under the qualified `Agent.play` form; both are
//! accepted here. Params arrive positionally, exactly as the host sent them.
use crate::agent::Agent;
use crate::errors::DispatchError;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// The name the agent capability is registered under
pub const CAPABILITY: &str = "Agent";

/// A method the host can call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `initialize(percepts, players, time_left)`
    Initialize,
    /// `play(percepts, player, step, time_left)`
    Play,
}

impl Method {
    /// parses a bare or `Agent.` qualified method name
    pub fn parse(name: &str) -> Result<Method, DispatchError> {
        let bare = match name.split_once('.') {
            Some((CAPABILITY, method)) => method,
            Some(_) => return Err(DispatchError::UnknownMethod(name.to_string())),
            None => name,
        };
        match bare {
            "initialize" => Ok(Method::Initialize),
            "play" => Ok(Method::Play),
            _ => Err(DispatchError::UnknownMethod(name.to_string())),
        }
    }

    /// the name this method is exposed under on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Initialize => "initialize",
            Method::Play => "play",
        }
    }

    fn arity(&self) -> usize {
        match self {
            Method::Initialize => 3,
            Method::Play => 4,
        }
    }

    fn invalid(&self, reason: impl Into<String>) -> DispatchError {
        DispatchError::InvalidParams {
            method: self.as_str(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn time_left(method: Method, v: &Value) -> Result<Option<f64>, DispatchError> {
    match v {
        Value::Null => Ok(None),
        other => other
            .as_f64()
            .map(Some)
            .ok_or_else(|| method.invalid(format!("time_left must be a number or null, got {}", other))),
    }
}

fn integer(method: Method, name: &str, v: &Value) -> Result<i64, DispatchError> {
    v.as_i64()
        .ok_or_else(|| method.invalid(format!("{} must be an integer, got {}", name, v)))
}

/// Calls `method` on `agent` with the positional `params` and encodes the
/// result for the wire: `true` for `initialize`, `[tag, row, col]` for `play`.
pub fn dispatch<A: Agent + ?Sized>(
    agent: &mut A,
    method: &str,
    params: &[Value],
) -> Result<Value, DispatchError> {
    let method = Method::parse(method)?;
    if params.len() != method.arity() {
        return Err(method.invalid(format!(
            "expected {} params, got {}",
            method.arity(),
            params.len()
        )));
    }

    match method {
        Method::Initialize => {
            let players = Vec::<i64>::deserialize(&params[1])
                .map_err(|e| method.invalid(format!("players: {}", e)))?;
            let time_left = time_left(method, &params[2])?;
            Ok(Value::Bool(agent.initialize(&params[0], &players, time_left)))
        }
        Method::Play => {
            let player = integer(method, "player", &params[1])?;
            let step = integer(method, "step", &params[2])?;
            let time_left = time_left(method, &params[3])?;
            let (tag, row, col) = agent.play(&params[0], player, step, time_left)?.to_wire();
            Ok(serde_json::json!([tag, row, col]))
        }
    }
}
