use std::sync::Arc;

use sunpath_control::{
    ControlClient, ControlCommand, ControlHandler, ControlResponse, ControlServer, ResponseData,
};
use tokio::sync::Mutex;

/// Remembers the last slider value.
struct Slider {
    value: f64,
}

impl ControlHandler for Slider {
    fn handle_command(&mut self, cmd: ControlCommand) -> ControlResponse {
        match cmd {
            ControlCommand::Ping => ControlResponse::pong(),
            ControlCommand::SetDayFraction { value } => {
                self.value = value;
                ControlResponse::pong()
            }
            ControlCommand::GetLabels => ControlResponse::ok(ResponseData::Labels {
                time_label: "--:--".into(),
                hour_label: format!("{}", self.value),
            }),
            _ => ControlResponse::error("unsupported"),
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_commands_over_tcp() {
    let handler = Arc::new(Mutex::new(Slider { value: 6.0 }));
    let server = ControlServer::bind(handler.clone(), 0).await.unwrap();
    let addr = server.local_addr();

    let responses = tokio::task::spawn_blocking(move || {
        let mut client = ControlClient::connect(addr).unwrap();
        vec![
            client.send(&ControlCommand::Ping).unwrap(),
            client
                .send(&ControlCommand::SetDayFraction { value: 6.5 })
                .unwrap(),
            client.send(&ControlCommand::GetLabels).unwrap(),
            client.send(&ControlCommand::GetSceneInfo).unwrap(),
        ]
    })
    .await
    .unwrap();

    assert_eq!(responses[0], ControlResponse::pong());
    assert_eq!(responses[1], ControlResponse::pong());
    assert_eq!(
        responses[2],
        ControlResponse::ok(ResponseData::Labels {
            time_label: "--:--".into(),
            hour_label: "6.5".into(),
        })
    );
    assert_eq!(responses[3], ControlResponse::error("unsupported"));
    assert_eq!(handler.lock().await.value, 6.5);

    server.shutdown();
}
