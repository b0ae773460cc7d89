use super::*;

#[test]
fn connection_status_class_maps_each_state() {
    assert_eq!(
        connection_status_class(ConnectionStatus::Connected),
        "connection-indicator connection-indicator--connected"
    );
    assert_eq!(
        connection_status_class(ConnectionStatus::Disconnected),
        "connection-indicator connection-indicator--disconnected"
    );
}
