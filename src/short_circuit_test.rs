use super::*;
use crate::constants::method;
use crate::context::RequestContext;
use crate::host::ResponseView;

fn config(error_status_code: u16) -> Arc<CorsConfiguration> {
    Arc::new(CorsConfiguration {
        allow_methods: ["GET", "POST"].into_iter().collect(),
        allow_headers: ["X-Foo"].into_iter().collect(),
        error_status_code,
        ..CorsConfiguration::default()
    })
}

fn preflight(acrm: &'static str, acrh: Option<&'static str>) -> RequestContext<'static> {
    RequestContext {
        method: method::OPTIONS,
        origin: Some("http://a.com"),
        access_control_request_method: Some(acrm),
        access_control_request_headers: acrh,
    }
}

mod install {
    use super::*;

    #[test]
    fn should_install_when_request_is_preflight() {
        // Arrange
        let mut responder = ShortCircuitResponder::new(config(400));

        // Act
        let installed = responder.install(&preflight("GET", None));

        // Assert
        assert!(installed);
        assert_eq!(responder.state(), ResponderState::Installed);
    }

    #[test]
    fn should_stay_uninstalled_when_request_is_actual() {
        let mut responder = ShortCircuitResponder::new(config(400));
        let ctx = RequestContext {
            method: method::GET,
            origin: Some("http://a.com"),
            access_control_request_method: None,
            access_control_request_headers: None,
        };

        assert!(!responder.install(&ctx));
        assert_eq!(responder.state(), ResponderState::Uninstalled);
        assert_eq!(responder.on_request_end(), None);
    }

    #[test]
    fn should_not_reinstall_when_already_responded() {
        let mut responder = ShortCircuitResponder::new(config(400));
        responder.install(&preflight("GET", None));
        responder.on_request_end();

        assert!(!responder.install(&preflight("GET", None)));
        assert_eq!(responder.state(), ResponderState::Responded);
    }
}

mod on_request_end {
    use super::*;

    #[test]
    fn should_respond_ok_with_empty_body_when_preflight_allowed() {
        // Arrange
        let mut responder = ShortCircuitResponder::new(config(400));
        responder.install(&preflight("GET", Some("x-foo")));

        // Act
        let response = responder.on_request_end().expect("installed responder answers");

        // Assert
        assert_eq!(response.status(), 200);
        assert!(response.body().is_empty());
        assert_eq!(responder.state(), ResponderState::Responded);
    }

    #[test]
    fn should_respond_with_error_status_when_method_rejected() {
        let mut responder = ShortCircuitResponder::new(config(400));
        responder.install(&preflight("PUT", None));

        let response = responder.on_request_end().expect("installed responder answers");

        assert_eq!(response.status(), 400);
    }

    #[test]
    fn should_respond_with_configured_status_when_headers_rejected() {
        let mut responder = ShortCircuitResponder::new(config(403));
        responder.install(&preflight("GET", Some("X-Foo, X-Secret")));

        let response = responder.on_request_end().expect("installed responder answers");

        assert_eq!(response.status(), 403);
    }

    #[test]
    fn should_respond_once_when_end_signalled_twice() {
        let mut responder = ShortCircuitResponder::new(config(400));
        responder.install(&preflight("GET", None));

        assert!(responder.on_request_end().is_some());
        assert!(responder.on_request_end().is_none());
    }
}

mod request_handler {
    use super::*;

    #[test]
    fn should_forward_when_pass_through() {
        let mut handler = RequestHandler::default();

        assert!(!handler.is_short_circuit());
        assert_eq!(handler.on_request_end(), HandlerOutcome::Forward);
    }

    #[test]
    fn should_forward_when_responder_never_installed() {
        let mut handler = RequestHandler::ShortCircuit(ShortCircuitResponder::new(config(400)));

        assert_eq!(handler.on_request_end(), HandlerOutcome::Forward);
    }

    #[test]
    fn should_respond_then_complete_when_short_circuit() {
        // Arrange
        let mut responder = ShortCircuitResponder::new(config(400));
        responder.install(&preflight("POST", None));
        let mut handler = RequestHandler::ShortCircuit(responder);

        // Act
        let first = handler.on_request_end();
        let second = handler.on_request_end();

        // Assert
        match first {
            HandlerOutcome::Respond(response) => assert_eq!(response.status(), 200),
            other => panic!("expected local response, got {other:?}"),
        }
        assert_eq!(second, HandlerOutcome::Complete);
    }
}
