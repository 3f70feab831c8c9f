//! Fake socket server installation.

use crate::intercept::SocketServerFactory;
use crate::types::mock::WebSocketMock;

/// Spawn a fake server per socket mock and run its installer.
///
/// One-shot: the engine constructs the endpoint and hands it to the
/// caller-supplied installer; teardown is the installer's (or the test's)
/// responsibility.
pub fn dispatch_web_socket_mocks(mocks: &[WebSocketMock], factory: &mut dyn SocketServerFactory) {
    for mock in mocks {
        let mut server = factory.bind(mock.url.as_str());
        (mock.installer)(server.as_mut());
    }
}
