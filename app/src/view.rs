use std::sync::Arc;

use common::Status;
use tokio::sync::mpsc;

use crate::caller::{log_settlement, DropCaller, DropOutcome};

/// Decorative icon shown on the airdrop screen.
const ICON_URL: &str = "https://image.flaticon.com/icons/svg/1487/1487521.svg";

/// The airdrop screen: owns the status flag and mediates `drop` calls.
pub struct AirdropView {
    status: Status,
    caller: Arc<dyn DropCaller>,
    settlement_tx: mpsc::UnboundedSender<DropOutcome>,
}

impl AirdropView {
    /// Build the view with `Status::Ready` and an injected caller. Also
    /// returns the settlement side of its channel so the event loop can feed
    /// completions back into `on_settlement`.
    pub fn new(caller: Arc<dyn DropCaller>) -> (Self, mpsc::UnboundedReceiver<DropOutcome>) {
        let (settlement_tx, settlement_rx) = mpsc::unbounded_channel();
        (
            Self {
                status: Status::default(),
                caller,
                settlement_tx,
            },
            settlement_rx,
        )
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Render the screen as text. Pure function of the current status.
    pub fn render(&self) -> String {
        format!(
            "Airdrop\n\
             {status}\n\
             Start to share some magic tokens!\n\
             (airdrop icon: {ICON_URL})\n\
             \n\
             [ Launch Airdrop ]\n",
            status = self.status
        )
    }

    /// Handle one trigger of the control: flip to `incoming` and issue one
    /// `drop` call whose settlement comes back over the channel.
    ///
    /// There is no guard against overlapping triggers; each one issues its
    /// own call and the last settlement to arrive wins the status field.
    pub fn on_trigger(&mut self) {
        self.status = Status::Incoming;
        let caller = self.caller.clone();
        let tx = self.settlement_tx.clone();
        tokio::spawn(async move {
            let outcome = caller.call_drop().await;
            // The receiver only goes away on shutdown.
            let _ = tx.send(outcome);
        });
    }

    /// Handle the settlement of a `drop` call. Both outcomes are logged and
    /// both advance the status to `done`.
    pub fn on_settlement(&mut self, outcome: DropOutcome) {
        log_settlement(&outcome);
        self.status = Status::Done;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StubCaller {
        receipt: Option<&'static str>,
    }

    #[async_trait]
    impl DropCaller for StubCaller {
        async fn call_drop(&self) -> DropOutcome {
            match self.receipt {
                Some(r) => Ok(r.to_string()),
                None => Err(anyhow::anyhow!("rejected")),
            }
        }
    }

    fn view_with(
        receipt: Option<&'static str>,
    ) -> (AirdropView, mpsc::UnboundedReceiver<DropOutcome>) {
        AirdropView::new(Arc::new(StubCaller { receipt }))
    }

    #[tokio::test]
    async fn starts_ready_with_trigger_present() {
        let (view, _rx) = view_with(Some("0xReceipt"));
        assert_eq!(view.status(), Status::Ready);
        let screen = view.render();
        assert!(screen.contains("ready"));
        assert!(screen.contains("Launch Airdrop"));
    }

    #[tokio::test]
    async fn trigger_shows_incoming_before_settlement() {
        let (mut view, _rx) = view_with(Some("0xReceipt"));
        view.on_trigger();
        // Synchronous: the call has not settled yet.
        assert_eq!(view.status(), Status::Incoming);
        assert!(view.render().contains("incoming"));
    }

    #[tokio::test]
    async fn successful_settlement_reaches_done() {
        let (mut view, mut rx) = view_with(Some("0xReceipt"));
        view.on_trigger();
        let outcome = rx.recv().await.unwrap();
        assert_eq!(outcome.as_deref().unwrap(), "0xReceipt");
        view.on_settlement(outcome);
        assert_eq!(view.status(), Status::Done);
        assert!(view.render().contains("done"));
    }

    #[tokio::test]
    async fn failed_settlement_still_reaches_done() {
        let (mut view, mut rx) = view_with(None);
        view.on_trigger();
        let outcome = rx.recv().await.unwrap();
        assert!(outcome.is_err());
        view.on_settlement(outcome);
        assert_eq!(view.status(), Status::Done);
        let screen = view.render();
        assert!(screen.contains("done"));
        assert!(!screen.contains("rejected"));
    }

    #[tokio::test]
    async fn retrigger_after_done_starts_a_new_cycle() {
        let (mut view, mut rx) = view_with(Some("0xReceipt"));
        view.on_trigger();
        let outcome = rx.recv().await.unwrap();
        view.on_settlement(outcome);
        assert_eq!(view.status(), Status::Done);

        // No guard: a second trigger issues a fresh call.
        view.on_trigger();
        assert_eq!(view.status(), Status::Incoming);
        assert!(rx.recv().await.unwrap().is_ok());
    }
}
