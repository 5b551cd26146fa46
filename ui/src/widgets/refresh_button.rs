//! The force-refresh action.
//!
//! A button that opens a confirmation dialog; only confirming fires the
//! mutation. The button itself reflects the mutation's state: spinner while
//! pending, a check after success, a warning mark after failure (no retry,
//! no further detail — matching the console's behaviour).

use bpa_business::{BusinessConfig, CONFIRM_BODY, CONFIRM_NOTE, RefreshResult, RefreshTrigger};
use egui::{Align2, Context, RichText, Ui, Vec2};

use crate::utils::colors::{COLOR_AMBER, COLOR_GREEN};

/// Render the refresh button. Clicking it only opens the confirmation
/// dialog; see [`confirm_refresh_window`].
pub fn refresh_button(ui: &mut Ui, refresh: &RefreshTrigger, confirm_open: &mut bool) {
    ui.horizontal(|ui| {
        match refresh.result() {
            RefreshResult::Pending => {
                ui.spinner();
            }
            RefreshResult::Success => {
                ui.colored_label(COLOR_GREEN, "✔");
            }
            RefreshResult::Error(err) => {
                ui.colored_label(COLOR_AMBER, "⚠").on_hover_text(err.to_string());
            }
            RefreshResult::Idle => {}
        }
        if ui.button("Force Refresh All Data").clicked() {
            *confirm_open = true;
        }
    });
}

/// Render the confirmation dialog while `confirm_open` is set. Confirming
/// starts the mutation; declining leaves it untouched.
pub fn confirm_refresh_window(
    ctx: &Context,
    confirm_open: &mut bool,
    refresh: &mut RefreshTrigger,
    config: &BusinessConfig,
) {
    if !*confirm_open {
        return;
    }

    egui::Window::new("Force Refresh All Data")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(CONFIRM_BODY);
            ui.add_space(4.0);
            ui.label(RichText::new(CONFIRM_NOTE).italics());
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    *confirm_open = false;
                }
                if ui.button("Force Refresh").clicked() {
                    refresh.start(config);
                    *confirm_open = false;
                }
            });
        });
}

#[cfg(test)]
mod refresh_button_test {
    use super::*;
    use egui_kittest::Harness;
    use kittest::Queryable as _;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct TestState {
        config: BusinessConfig,
        refresh: RefreshTrigger,
        confirm_open: bool,
    }

    fn harness_for(config: BusinessConfig) -> Harness<'static, TestState> {
        let state = TestState {
            config,
            refresh: RefreshTrigger::default(),
            confirm_open: false,
        };
        Harness::new_state(
            |ctx, state: &mut TestState| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    refresh_button(ui, &state.refresh, &mut state.confirm_open);
                });
                let TestState {
                    config,
                    refresh,
                    confirm_open,
                } = state;
                confirm_refresh_window(ctx, confirm_open, refresh, config);
            },
            state,
        )
    }

    #[test]
    fn test_click_opens_confirmation_without_firing() {
        let mut harness = harness_for(BusinessConfig::new("http://127.0.0.1:1"));
        harness.get_by_label("Force Refresh All Data").click();
        harness.run();

        assert!(harness.state().confirm_open);
        // The dialog is up, the mutation has not fired.
        assert!(harness.query_by_label_contains("slow down normal usage").is_some());
        assert!(harness.state().refresh.is_idle());
    }

    #[test]
    fn test_declining_confirmation_never_fires() {
        let mut harness = harness_for(BusinessConfig::new("http://127.0.0.1:1"));
        harness.get_by_label("Force Refresh All Data").click();
        harness.run();
        harness.get_by_label("Cancel").click();
        harness.run();

        assert!(!harness.state().confirm_open);
        assert!(harness.state().refresh.is_idle());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_confirming_fires_the_mutation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/ExecBestPracticeAnalyser"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let mut harness = harness_for(BusinessConfig::new(server.uri()));
        harness.get_by_label("Force Refresh All Data").click();
        harness.run();
        harness.get_by_label("Force Refresh").click();
        // The button shows a spinner while the mutation is pending, which
        // requests continuous repaint; `run()` would exceed max_steps. Step a
        // single frame to process the click and fire the mutation.
        harness.step();

        assert!(!harness.state().confirm_open);
        for _ in 0..100 {
            harness.state_mut().refresh.poll();
            if !harness.state_mut().refresh.is_pending() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        assert_eq!(harness.state().refresh.result(), &RefreshResult::Success);
    }
}
