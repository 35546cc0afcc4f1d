use std::{cell::RefCell, rc::Rc};

use super::support::RecordingOpener;
use crate::core::{Activation, Dispatcher, ToolId, View, DASHBOARD_URL};

/// Helper: dispatcher whose navigation callback records every view
fn create_test_dispatcher(
    opener: RecordingOpener,
) -> (Dispatcher<RecordingOpener>, Rc<RefCell<Vec<View>>>) {
    let navigated = Rc::new(RefCell::new(Vec::new()));
    let sink = navigated.clone();

    let dispatcher = Dispatcher::new(opener, move |view| sink.borrow_mut().push(view));
    (dispatcher, navigated)
}

#[test]
fn test_internal_tools_navigate_exactly_once() {
    for (tool, view) in [
        (ToolId::Viewer, View::Viewer),
        (ToolId::Shuffle, View::Shuffle),
        (ToolId::Manual, View::Manual),
        (ToolId::Merge, View::Merge),
    ] {
        let opener = RecordingOpener::default();
        let opened = opener.opened.clone();
        let (dispatcher, navigated) = create_test_dispatcher(opener);

        let activation = dispatcher.activate(tool);

        assert_eq!(activation, Activation::Navigated(view));
        assert_eq!(*navigated.borrow(), vec![view], "tool {}", tool);
        assert!(opened.borrow().is_empty(), "tool {} opened a URL", tool);
    }
}

#[test]
fn test_google_sheets_opens_dashboard() {
    let opener = RecordingOpener::default();
    let opened = opener.opened.clone();
    let (dispatcher, navigated) = create_test_dispatcher(opener);

    let activation = dispatcher.activate(ToolId::GoogleSheets);

    assert_eq!(activation, Activation::ExternalOpened(DASHBOARD_URL));
    assert_eq!(
        *opened.borrow(),
        vec!["https://tayasarbhat.github.io/GSN/".to_string()]
    );
    assert!(navigated.borrow().is_empty());
}

#[test]
fn test_open_failure_is_absorbed() {
    let opener = RecordingOpener {
        fail: true,
        ..RecordingOpener::default()
    };
    let opened = opener.opened.clone();
    let (dispatcher, navigated) = create_test_dispatcher(opener);

    let activation = dispatcher.activate(ToolId::GoogleSheets);

    assert_eq!(activation, Activation::ExternalOpened(DASHBOARD_URL));
    assert_eq!(opened.borrow().len(), 1);
    assert!(navigated.borrow().is_empty());
}

#[test]
fn test_activations_are_independent() {
    let opener = RecordingOpener::default();
    let opened = opener.opened.clone();
    let (dispatcher, navigated) = create_test_dispatcher(opener);

    dispatcher.activate(ToolId::Merge);
    dispatcher.activate(ToolId::GoogleSheets);
    dispatcher.activate(ToolId::Merge);
    dispatcher.activate(ToolId::Viewer);

    assert_eq!(
        *navigated.borrow(),
        vec![View::Merge, View::Merge, View::Viewer]
    );
    assert_eq!(opened.borrow().len(), 1);
}
