mod harness;

use std::time::Duration;

use fleetdeck::app::action::Action;
use fleetdeck::app::device_limit::{ContactReason, DEFAULT_DEBOUNCE, PlanChangeRequest};
use fleetdeck::app::effect::Effect;
use fleetdeck::app::reducer::reduce;
use fleetdeck::domain::{AddonId, ColumnAttribute, PlanId};
use harness::fixtures::{MEASURED_WIDTHS, console_state, device_headers};
use harness::{dispatch_all, test_instant};

mod selection {
    use super::*;

    #[test]
    fn row_clicks_report_each_new_selection() {
        let mut state = console_state();
        let now = test_instant();

        let effects = dispatch_all(
            &mut state,
            vec![Action::ToggleRow(0), Action::ToggleRow(2), Action::ToggleRow(0)],
            now,
        );

        assert_eq!(
            effects,
            vec![
                Effect::SelectionChanged { rows: vec![0] },
                Effect::SelectionChanged { rows: vec![0, 2] },
                Effect::SelectionChanged { rows: vec![2] },
            ]
        );
    }

    #[test]
    fn header_checkbox_selects_whole_page_then_clears() {
        let mut state = console_state();
        let now = test_instant();

        let effects = reduce(&mut state, Action::ToggleAllRows, now);
        assert_eq!(
            effects,
            vec![Effect::SelectionChanged {
                rows: (0..20).collect()
            }]
        );

        reduce(&mut state, Action::ToggleAllRows, now);
        assert!(state.device_list.selection.is_empty());
    }

    #[test]
    fn header_checkbox_on_last_page_only_covers_its_rows() {
        let mut state = console_state();
        let now = test_instant();
        reduce(&mut state, Action::ChangePage(3), now);

        reduce(&mut state, Action::ToggleAllRows, now);

        assert_eq!(state.device_list.selection.rows(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn clearing_empty_selection_is_silent() {
        let mut state = console_state();

        assert!(reduce(&mut state, Action::ClearSelection, test_instant()).is_empty());
    }
}

mod pagination {
    use super::*;

    #[test]
    fn page_change_fetches_and_drops_selection() {
        let mut state = console_state();
        let now = test_instant();
        reduce(&mut state, Action::ToggleRow(4), now);

        let effects = reduce(&mut state, Action::ChangePage(2), now);

        assert_eq!(
            effects,
            vec![
                Effect::SelectionChanged { rows: vec![] },
                Effect::FetchDevices {
                    page: 2,
                    per_page: 20
                },
            ]
        );
    }

    #[test]
    fn invalid_page_size_surfaces_error() {
        let mut state = console_state();

        let effects = reduce(&mut state, Action::ChangePerPage(13), test_instant());

        assert!(matches!(effects.as_slice(), [Effect::ShowError(msg)] if msg.contains("13")));
        assert_eq!(state.device_list.per_page(), 20);
    }

    #[test]
    fn shrinking_total_refetches_clamped_page() {
        let mut state = console_state();
        let now = test_instant();
        reduce(&mut state, Action::ChangePage(3), now);

        let effects = reduce(&mut state, Action::DevicesLoaded { total: 25 }, now);

        assert_eq!(
            effects,
            vec![Effect::FetchDevices {
                page: 2,
                per_page: 20
            }]
        );
    }

    #[test]
    fn shrinking_total_reports_dropped_selection_before_refetch() {
        let mut state = console_state();
        let now = test_instant();

        dispatch_all(
            &mut state,
            vec![Action::ChangePage(3), Action::ToggleRow(1)],
            now,
        );
        let effects = reduce(&mut state, Action::DevicesLoaded { total: 25 }, now);

        assert_eq!(
            effects,
            vec![
                Effect::SelectionChanged { rows: vec![] },
                Effect::FetchDevices {
                    page: 2,
                    per_page: 20
                },
            ]
        );
        assert!(state.device_list.selection.is_empty());
    }

    #[test]
    fn shorter_current_page_drops_rows_past_its_end() {
        let mut state = console_state();
        let now = test_instant();
        dispatch_all(
            &mut state,
            vec![
                Action::ChangePage(3),
                Action::ToggleRow(4),
                Action::ToggleRow(0),
            ],
            now,
        );

        let effects = reduce(&mut state, Action::DevicesLoaded { total: 42 }, now);

        assert_eq!(effects, vec![Effect::SelectionChanged { rows: vec![0] }]);
        assert_eq!(state.device_list.page(), 3);
    }

    #[test]
    fn page_size_change_reports_cleared_selection() {
        let mut state = console_state();
        let now = test_instant();
        reduce(&mut state, Action::ToggleRow(2), now);

        let effects = reduce(&mut state, Action::ChangePerPage(50), now);

        assert_eq!(
            effects,
            vec![
                Effect::SelectionChanged { rows: vec![] },
                Effect::FetchDevices {
                    page: 1,
                    per_page: 50
                },
            ]
        );
    }
}

mod column_drag {
    use super::*;

    fn drag(pointer_x: f64) -> Action {
        Action::DragColumn {
            measured_widths: MEASURED_WIDTHS.to_vec(),
            pointer_x,
        }
    }

    #[test]
    fn drag_updates_sizes_and_release_persists_them() {
        let mut state = console_state();
        let now = test_instant();

        let effects = dispatch_all(
            &mut state,
            vec![
                Action::BeginColumnDrag {
                    index: 2,
                    pointer_x: 90.0,
                },
                drag(80.0),
            ],
            now,
        );
        assert!(effects.is_empty());

        let widths = state.columns.sizes.widths_for(&device_headers(), 0.0);
        assert_eq!(widths, vec![120.0, 120.0, 230.0, 130.0, 150.0]);

        let effects = reduce(&mut state, Action::EndColumnDrag, now);
        assert!(matches!(
            effects.as_slice(),
            [Effect::PersistColumnSizes { table, sizes }]
                if table == "devices"
                    && sizes.get(&ColumnAttribute::new("artifact_name", "inventory")) == Some(230.0)
        ));
        assert_eq!(state.columns.drag, None);
    }

    #[test]
    fn each_tick_uses_previous_pointer_position() {
        let mut state = console_state();
        let now = test_instant();

        // The caller re-measures after every tick; the second tick starts from
        // the same measured widths but a pointer already moved by 10.
        dispatch_all(
            &mut state,
            vec![
                Action::BeginColumnDrag {
                    index: 2,
                    pointer_x: 80.0,
                },
                drag(90.0),
                drag(95.0),
            ],
            now,
        );

        let widths = state.columns.sizes.widths_for(&device_headers(), 0.0);
        assert_eq!(widths, vec![120.0, 120.0, 245.0, 115.0, 150.0]);
    }

    #[test]
    fn dragging_last_column_changes_nothing() {
        let mut state = console_state();
        let now = test_instant();

        dispatch_all(
            &mut state,
            vec![
                Action::BeginColumnDrag {
                    index: 4,
                    pointer_x: 80.0,
                },
                drag(180.0),
            ],
            now,
        );

        let widths = state.columns.sizes.widths_for(&device_headers(), 0.0);
        assert_eq!(widths, vec![120.0, 120.0, 240.0, 120.0, 150.0]);
    }

    #[test]
    fn move_without_press_is_ignored() {
        let mut state = console_state();
        let now = test_instant();

        assert!(reduce(&mut state, drag(50.0), now).is_empty());
        assert!(state.columns.sizes.is_empty());
        assert!(reduce(&mut state, Action::EndColumnDrag, now).is_empty());
    }
}

mod subscription {
    use super::*;

    fn preview_quantity(effects: &[Effect]) -> Option<u32> {
        effects.iter().find_map(|effect| match effect {
            Effect::FetchBillingPreview(order) => Some(order.products[0].quantity),
            _ => None,
        })
    }

    fn organization(plan: PlanId, device_limit: u32) -> Action {
        Action::OrganizationLoaded {
            plan,
            device_limit,
            addons: vec![],
        }
    }

    #[test]
    fn settled_input_triggers_preview_for_snapped_limit() {
        let mut state = console_state();
        let start = test_instant();

        let effects = reduce(&mut state, organization(PlanId::Os, 0), start);
        assert_eq!(preview_quantity(&effects), Some(50));

        assert!(reduce(&mut state, Action::RequestDeviceLimit(130), start).is_empty());
        assert_eq!(state.next_deadline(), Some(start + DEFAULT_DEBOUNCE));
        assert!(reduce(&mut state, Action::Tick, start + Duration::from_millis(100)).is_empty());

        let effects = reduce(&mut state, Action::Tick, start + DEFAULT_DEBOUNCE);
        assert_eq!(preview_quantity(&effects), Some(150));
        assert_eq!(state.next_deadline(), None);
    }

    #[test]
    fn reducing_below_paid_limit_asks_for_contact() {
        let mut state = console_state();
        let start = test_instant();
        reduce(&mut state, organization(PlanId::Professional, 500), start);

        reduce(&mut state, Action::RequestDeviceLimit(300), start);
        let effects = reduce(&mut state, Action::Tick, start + DEFAULT_DEBOUNCE);

        assert_eq!(state.subscription.limit, 500);
        assert_eq!(
            state.subscription.contact_reason,
            Some(ContactReason::ReduceLimit)
        );
        assert_eq!(preview_quantity(&effects), Some(500));
    }

    #[test]
    fn over_limit_alert_goes_away_after_valid_input() {
        let mut state = console_state();
        let start = test_instant();
        let later = start + Duration::from_secs(2);
        dispatch_all(
            &mut state,
            vec![organization(PlanId::Os, 0), Action::RequestDeviceLimit(9000)],
            start,
        );
        reduce(&mut state, Action::Tick, start + DEFAULT_DEBOUNCE);
        assert_eq!(
            state.subscription.contact_reason,
            Some(ContactReason::OverLimit)
        );

        reduce(&mut state, Action::RequestDeviceLimit(300), later);
        reduce(&mut state, Action::Tick, later + DEFAULT_DEBOUNCE);
        assert_eq!(state.subscription.contact_reason, None);

        reduce(&mut state, Action::SelectPlan(PlanId::Professional), later);
        assert_eq!(state.subscription.contact_reason, None);
    }

    #[test]
    fn switching_plan_previews_at_new_plan_minimum() {
        let mut state = console_state();
        let now = test_instant();
        reduce(&mut state, organization(PlanId::Os, 0), now);

        let effects = reduce(&mut state, Action::SelectPlan(PlanId::Professional), now);

        assert_eq!(preview_quantity(&effects), Some(250));
        assert_eq!(state.subscription.limit, 250);
    }

    #[test]
    fn downgrade_drops_monitor_from_preview() {
        let mut state = console_state();
        let now = test_instant();
        reduce(&mut state, organization(PlanId::Professional, 250), now);
        reduce(&mut state, Action::ToggleAddon(AddonId::Monitor), now);

        let effects = reduce(&mut state, Action::SelectPlan(PlanId::Os), now);

        let addons = effects.iter().find_map(|effect| match effect {
            Effect::FetchBillingPreview(order) => Some(order.products[0].addons.clone()),
            _ => None,
        });
        assert_eq!(addons, Some(vec![]));
    }

    #[test]
    fn ineligible_addon_toggle_requests_nothing() {
        let mut state = console_state();
        let now = test_instant();
        reduce(&mut state, organization(PlanId::Os, 0), now);

        assert!(reduce(&mut state, Action::ToggleAddon(AddonId::Monitor), now).is_empty());
        assert!(state.subscription.addons.is_empty());
    }

    #[test]
    fn enterprise_plan_never_requests_preview() {
        let mut state = console_state();
        let now = test_instant();
        reduce(&mut state, organization(PlanId::Os, 0), now);

        let effects = dispatch_all(
            &mut state,
            vec![
                Action::SelectPlan(PlanId::Enterprise),
                Action::ToggleAddon(AddonId::Monitor),
            ],
            now,
        );

        assert_eq!(preview_quantity(&effects), None);
    }

    #[test]
    fn enterprise_request_is_sent_to_support() {
        let mut state = console_state();
        let now = test_instant();
        dispatch_all(
            &mut state,
            vec![
                Action::OrganizationLoaded {
                    plan: PlanId::Professional,
                    device_limit: 250,
                    addons: vec![AddonId::Configure],
                },
                Action::SelectPlan(PlanId::Enterprise),
            ],
            now,
        );

        let effects = reduce(
            &mut state,
            Action::RequestPlanChange {
                message: "We need 8000 devices".to_string(),
            },
            now,
        );

        assert_eq!(
            effects,
            vec![Effect::RequestPlanChange(PlanChangeRequest {
                current_plan: "Professional".to_string(),
                requested_plan: "Enterprise".to_string(),
                current_addons: "configure".to_string(),
                requested_addons: "configure".to_string(),
                user_message: "We need 8000 devices".to_string(),
            })]
        );
    }

    #[test]
    fn empty_enterprise_message_shows_error() {
        let mut state = console_state();
        let now = test_instant();
        reduce(&mut state, organization(PlanId::Os, 0), now);

        let effects = reduce(
            &mut state,
            Action::RequestPlanChange {
                message: String::new(),
            },
            now,
        );

        assert!(matches!(effects.as_slice(), [Effect::ShowError(_)]));
    }
}

mod preauth {
    use super::*;

    fn fill_form() -> Vec<Action> {
        vec![
            Action::PreauthSetKey {
                file_name: "test.pem".to_string(),
                contents: "testContent plain".to_string(),
            },
            Action::PreauthSetAttribute {
                index: 0,
                key: "testKey".to_string(),
                value: "testValue".to_string(),
            },
        ]
    }

    #[test]
    fn filled_form_submits_request() {
        let mut state = console_state();
        let now = test_instant();
        dispatch_all(&mut state, fill_form(), now);

        let effects = reduce(&mut state, Action::PreauthSubmit { add_another: true }, now);

        assert!(matches!(
            effects.as_slice(),
            [Effect::SubmitPreauth { request, add_another: true }]
                if request.pubkey == "testContent plain"
                    && request.identity_data.get("testKey").map(String::as_str) == Some("testValue")
        ));
    }

    #[test]
    fn reached_device_limit_blocks_submission() {
        let mut state = console_state();
        let now = test_instant();
        reduce(
            &mut state,
            Action::DeviceLimitLoaded {
                accepted: 100,
                limit: 2,
            },
            now,
        );
        dispatch_all(&mut state, fill_form(), now);

        let effects = reduce(&mut state, Action::PreauthSubmit { add_another: false }, now);

        assert!(effects.is_empty());
        assert!(!state.preauth.can_save());
        assert!(
            state
                .preauth
                .gate
                .warning()
                .is_some_and(|text| text.contains("You have reached your limit"))
        );
        assert!(
            state
                .preauth
                .error
                .as_deref()
                .is_some_and(|text| text.contains("reached your limit"))
        );
    }

    #[test]
    fn failed_save_shows_error_until_next_edit() {
        let mut state = console_state();
        let now = test_instant();
        dispatch_all(&mut state, fill_form(), now);

        reduce(&mut state, Action::PreauthFailed("test-errortext".to_string()), now);
        assert_eq!(state.preauth.error.as_deref(), Some("test-errortext"));

        reduce(
            &mut state,
            Action::PreauthSetAttribute {
                index: 0,
                key: "testKey".to_string(),
                value: "testValues".to_string(),
            },
            now,
        );
        assert_eq!(state.preauth.error, None);
    }

    #[test]
    fn completed_save_resets_form_and_refreshes_list() {
        let mut state = console_state();
        let now = test_instant();
        dispatch_all(&mut state, fill_form(), now);

        let effects = reduce(&mut state, Action::PreauthCompleted { add_another: false }, now);

        assert_eq!(
            effects,
            vec![Effect::FetchDevices {
                page: 1,
                per_page: 20
            }]
        );
        assert_eq!(state.preauth.public_key, "");
    }

    #[test]
    fn save_and_add_another_keeps_list_as_is() {
        let mut state = console_state();
        let now = test_instant();
        dispatch_all(&mut state, fill_form(), now);

        let effects = reduce(&mut state, Action::PreauthCompleted { add_another: true }, now);

        assert!(effects.is_empty());
        assert_eq!(state.preauth.key_file_name, None);
    }
}
