use passgate_common::payload::CredentialType;
use passgate_engine::Engine;
use pyo3::{
    exceptions::{PyRuntimeError, PyValueError},
    prelude::*,
};

#[pyclass(module = "passgate", frozen)]
struct PassGate {
    engine: Engine,
}

#[pymethods]
impl PassGate {
    #[new]
    pub fn __new__(secret: &[u8]) -> PyResult<Self> {
        let engine = Engine::builder()
            .with_secret(secret)
            .build()
            .map_err(|err| PyValueError::new_err(err.to_string()))?;

        Ok(Self { engine })
    }

    #[pyo3(signature = (user_id, credential_type, expiry_time_ms, permissions = Vec::new()))]
    pub fn generate(
        &self,
        user_id: u64,
        credential_type: &str,
        expiry_time_ms: i64,
        permissions: Vec<String>,
    ) -> PyResult<String> {
        let credential_type: CredentialType = credential_type
            .parse()
            .map_err(PyValueError::new_err)?;

        self.engine
            .generate(
                user_id,
                credential_type,
                expiry_time_ms,
                permissions.as_slice(),
            )
            .map_err(|err| PyRuntimeError::new_err(err.to_string()))
    }

    /// Returns the payload as JSON, or None for any invalid credential.
    pub fn parse(&self, blob: &str) -> Option<String> {
        let payload = self.engine.parse(blob).ok()?;
        serde_json::to_string(&payload).ok()
    }

    pub fn rotating_code(&self, base_code: &str, window_minutes: i64) -> String {
        self.engine.rotating_code(base_code, window_minutes)
    }

    pub fn validate_rotating_code(&self, code: &str, base_code: &str, window_minutes: i64) -> bool {
        self.engine.validate_rotating_code(code, base_code, window_minutes)
    }
}

#[pyfunction]
fn generate_with_checksum(base_code: &str) -> String {
    passgate_engine::generate_with_checksum(base_code)
}

#[pyfunction]
fn validate_with_checksum(code: &str) -> Option<String> {
    passgate_engine::validate_with_checksum(code).map(str::to_string)
}

#[pymodule]
fn passgate(module: &Bound<'_, PyModule>) -> PyResult<()> {
    module.add_class::<PassGate>()?;
    module.add_function(wrap_pyfunction!(generate_with_checksum, module)?)?;
    module.add_function(wrap_pyfunction!(validate_with_checksum, module)?)?;

    Ok(())
}
