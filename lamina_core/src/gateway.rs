//! # Action Gateway
//!
//! Turns the current form into exactly one backend request per [`Action`]
//! and hands the successful result to a [`ResultSink`].
//!
//! The request body is captured synchronously from the form, so the returned
//! future owns everything it needs (`'static`) and can be spawned by the GUI
//! runtime or awaited directly by the CLI. A ply stack that does not parse
//! resolves the future with the validation error without touching the
//! network; the caller sees the same completion path either way.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use lamina_core::client::HttpClient;
//! use lamina_core::feedback::Action;
//! use lamina_core::form::LaminateForm;
//! use lamina_core::gateway::Gateway;
//! use lamina_core::materials::MaterialLibrary;
//!
//! # async fn demo() -> lamina_core::LaminaResult<()> {
//! let api = HttpClient::new("http://localhost:8000", Duration::from_secs(30))?;
//! let gateway = Gateway::new(Arc::new(api));
//! let form = LaminateForm::from_preset(MaterialLibrary::default().get("carbon")?);
//! let result = gateway.run(Action::Polar, &form).await?;
//! assert_eq!(result.action(), Action::Polar);
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::sync::Arc;

use tracing::info;

use crate::client::LaminateApi;
use crate::errors::LaminaResult;
use crate::feedback::Action;
use crate::form::LaminateForm;
use crate::laminate::{CalculateResponse, EnvelopePoint, FailureRequest, PolarSample};

/// Where a successful result is rendered. Each result goes to exactly one
/// method.
pub trait ResultSink {
    fn show_calculation(&mut self, result: CalculateResponse);

    fn show_polar(&mut self, samples: Vec<PolarSample>);

    fn show_envelope(&mut self, points: Vec<EnvelopePoint>);
}

/// Successful outcome of one action.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult {
    Calculated(CalculateResponse),
    Polar(Vec<PolarSample>),
    Envelope(Vec<EnvelopePoint>),
}

impl ActionResult {
    pub fn action(&self) -> Action {
        match self {
            ActionResult::Calculated(_) => Action::Calculate,
            ActionResult::Polar(_) => Action::Polar,
            ActionResult::Envelope(_) => Action::Envelope,
        }
    }

    /// Hand the payload to the matching sink method.
    pub fn deliver(self, sink: &mut impl ResultSink) {
        match self {
            ActionResult::Calculated(result) => sink.show_calculation(result),
            ActionResult::Polar(samples) => sink.show_polar(samples),
            ActionResult::Envelope(points) => sink.show_envelope(points),
        }
    }
}

/// Issues backend requests through an injected [`LaminateApi`].
#[derive(Clone)]
pub struct Gateway {
    api: Arc<dyn LaminateApi>,
}

impl Gateway {
    pub fn new(api: Arc<dyn LaminateApi>) -> Self {
        Gateway { api }
    }

    /// Run `action` against a snapshot of `form`.
    pub fn run(
        &self,
        action: Action,
        form: &LaminateForm,
    ) -> impl Future<Output = LaminaResult<ActionResult>> + 'static {
        let api = Arc::clone(&self.api);
        let laminate = form.laminate_input();
        let limits = form.limits();

        async move {
            let laminate = laminate?;
            let result = match action {
                Action::Calculate => api.calculate(&laminate).await.map(ActionResult::Calculated),
                Action::Polar => api.polar(&laminate).await.map(ActionResult::Polar),
                Action::Envelope => {
                    let request = FailureRequest { laminate, limits };
                    api.failure_envelope(&request).await.map(ActionResult::Envelope)
                }
            }?;
            info!("{} finished", action.label());
            Ok(result)
        }
    }

    pub fn calculate(
        &self,
        form: &LaminateForm,
    ) -> impl Future<Output = LaminaResult<ActionResult>> + 'static {
        self.run(Action::Calculate, form)
    }

    pub fn polar(
        &self,
        form: &LaminateForm,
    ) -> impl Future<Output = LaminaResult<ActionResult>> + 'static {
        self.run(Action::Polar, form)
    }

    pub fn envelope(
        &self,
        form: &LaminateForm,
    ) -> impl Future<Output = LaminaResult<ActionResult>> + 'static {
        self.run(Action::Envelope, form)
    }
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::errors::LaminaError;
    use crate::form::Field;
    use crate::laminate::{AbdMatrix, EngineeringConstants, LaminateInput};
    use crate::materials::composites;
    use crate::units::{Degrees, Pascals};

    /// Records request bodies and answers with canned data.
    #[derive(Default)]
    struct FakeApi {
        calls: Mutex<Vec<String>>,
        fail_with: Option<LaminaError>,
    }

    impl FakeApi {
        fn record(&self, call: &str) -> LaminaResult<()> {
            self.calls.lock().unwrap().push(call.to_string());
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl LaminateApi for FakeApi {
        async fn calculate(&self, input: &LaminateInput) -> LaminaResult<CalculateResponse> {
            self.record("calculate")?;
            Ok(CalculateResponse {
                properties: EngineeringConstants {
                    ex: input.material.e1,
                    ey: input.material.e2,
                    gxy: input.material.g12,
                    vxy: input.material.v12,
                },
                abd: AbdMatrix(vec![vec![0.0; 6]; 6]),
            })
        }

        async fn polar(&self, input: &LaminateInput) -> LaminaResult<Vec<PolarSample>> {
            self.record("polar")?;
            Ok(input
                .stack
                .iter()
                .map(|angle| PolarSample {
                    angle: *angle,
                    ex: input.material.e1,
                    ey: input.material.e2,
                    gxy: input.material.g12,
                })
                .collect())
        }

        async fn failure_envelope(
            &self,
            request: &FailureRequest,
        ) -> LaminaResult<Vec<EnvelopePoint>> {
            self.record("failure")?;
            Ok(vec![EnvelopePoint(request.limits.xt.0, 0.0)])
        }
    }

    fn carbon_form() -> LaminateForm {
        LaminateForm::from_preset(&composites::carbon_epoxy())
    }

    #[derive(Default)]
    struct CountingSink {
        calculations: usize,
        polars: usize,
        envelopes: Vec<EnvelopePoint>,
    }

    impl ResultSink for CountingSink {
        fn show_calculation(&mut self, _result: CalculateResponse) {
            self.calculations += 1;
        }

        fn show_polar(&mut self, _samples: Vec<PolarSample>) {
            self.polars += 1;
        }

        fn show_envelope(&mut self, points: Vec<EnvelopePoint>) {
            self.envelopes = points;
        }
    }

    #[tokio::test]
    async fn test_each_action_hits_one_endpoint() {
        let api = Arc::new(FakeApi::default());
        let gateway = Gateway::new(api.clone());
        let form = carbon_form();

        for action in Action::ALL {
            let result = gateway.run(action, &form).await.unwrap();
            assert_eq!(result.action(), action);
        }
        assert_eq!(*api.calls.lock().unwrap(), vec!["calculate", "polar", "failure"]);
    }

    #[tokio::test]
    async fn test_results_reach_one_sink_method() {
        let gateway = Gateway::new(Arc::new(FakeApi::default()));
        let form = carbon_form();
        let mut sink = CountingSink::default();

        gateway.envelope(&form).await.unwrap().deliver(&mut sink);
        assert_eq!(sink.calculations, 0);
        assert_eq!(sink.polars, 0);
        assert_eq!(sink.envelopes, vec![EnvelopePoint(form.limits().xt.0, 0.0)]);

        gateway.calculate(&form).await.unwrap().deliver(&mut sink);
        assert_eq!(sink.calculations, 1);
        assert_eq!(sink.polars, 0);
    }

    #[tokio::test]
    async fn test_invalid_stack_skips_network() {
        let api = Arc::new(FakeApi::default());
        let gateway = Gateway::new(api.clone());
        let mut form = carbon_form();
        form.edit(Field::Stack, "0, abc");

        let err = gateway.polar(&form).await.unwrap_err();
        assert_eq!(err, LaminaError::invalid_angle("abc"));
        assert!(api.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_form_snapshot_taken_at_call_time() {
        let gateway = Gateway::new(Arc::new(FakeApi::default()));
        let mut form = carbon_form();
        form.edit(Field::Stack, "0 90");
        let pending = gateway.polar(&form);
        form.edit(Field::Stack, "45");

        let ActionResult::Polar(samples) = pending.await.unwrap() else {
            panic!("expected polar samples");
        };
        let angles: Vec<Degrees> = samples.iter().map(|s| s.angle).collect();
        assert_eq!(angles, vec![Degrees(0.0), Degrees(90.0)]);
    }

    #[tokio::test]
    async fn test_backend_error_passes_through() {
        let api = FakeApi {
            fail_with: Some(LaminaError::backend(422, "E1: must be positive")),
            ..FakeApi::default()
        };
        let gateway = Gateway::new(Arc::new(api));
        let mut form = carbon_form();
        form.edit(Field::E1, "-1");
        assert_eq!(form.laminate_input().unwrap().material.e1, Pascals(-1.0));

        let err = gateway.calculate(&form).await.unwrap_err();
        assert_eq!(err.user_message(), "E1: must be positive");
    }
}
