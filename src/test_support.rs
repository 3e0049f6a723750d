// Dobles de prueba compartidos: wallet con respuestas guionizadas y
// notificador que guarda las alertas.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use serde_json::Value;

use crate::services::notifier::Notifier;
use crate::services::wallet_provider::{WalletError, WalletProvider};

type Scripted = Result<Value, WalletError>;

/// Wallet falsa: cada método tiene una cola de respuestas.
/// La última respuesta de la cola se repite indefinidamente.
pub struct FakeProvider {
    available: bool,
    responses: RefCell<HashMap<String, VecDeque<Scripted>>>,
    calls: RefCell<Vec<(String, Value)>>,
    sleeps: Cell<usize>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self {
            available: true,
            responses: RefCell::new(HashMap::new()),
            calls: RefCell::new(Vec::new()),
            sleeps: Cell::new(0),
        }
    }

    /// Sin wallet instalada
    pub fn missing() -> Self {
        Self { available: false, ..Self::new() }
    }

    pub fn respond(self, method: &str, value: Value) -> Self {
        self.script(method, Ok(value))
    }

    pub fn fail(self, method: &str, error: WalletError) -> Self {
        self.script(method, Err(error))
    }

    fn script(self, method: &str, response: Scripted) -> Self {
        self.responses
            .borrow_mut()
            .entry(method.to_string())
            .or_default()
            .push_back(response);
        self
    }

    pub fn calls_to(&self, method: &str) -> usize {
        self.calls.borrow().iter().filter(|(m, _)| m == method).count()
    }

    pub fn params_of(&self, method: &str) -> Vec<Value> {
        self.calls
            .borrow()
            .iter()
            .filter(|(m, _)| m == method)
            .map(|(_, params)| params.clone())
            .collect()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn sleeps(&self) -> usize {
        self.sleeps.get()
    }
}

impl WalletProvider for FakeProvider {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn request(&self, method: &str, params: Value) -> Result<Value, WalletError> {
        self.calls.borrow_mut().push((method.to_string(), params));
        let mut responses = self.responses.borrow_mut();
        let queue = responses
            .get_mut(method)
            .ok_or_else(|| WalletError::Rpc { code: -32601, message: format!("{} not scripted", method) })?;
        if queue.len() > 1 {
            queue.pop_front().unwrap_or(Err(WalletError::Transport("empty script".into())))
        } else {
            queue.front().cloned().unwrap_or(Err(WalletError::Transport("empty script".into())))
        }
    }

    async fn sleep(&self, _millis: u32) {
        self.sleeps.set(self.sleeps.get() + 1);
    }
}

/// Guarda las alertas en lugar de abrir un diálogo
#[derive(Default)]
pub struct RecordingNotifier {
    alerts: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}
