// src/data.rs

use crate::error::FetchError;
use crate::model::Question;
use crate::quiz::Event;
use std::sync::mpsc::{self, Receiver};

/// Interpreta el cuerpo JSON del servidor: un array de preguntas.
pub fn parse_questions(text: &str) -> Result<Vec<Question>, FetchError> {
    Ok(serde_json::from_str(text)?)
}

/// Traduce el resultado de la descarga al evento que consume el reductor.
pub fn outcome_event(result: Result<Vec<Question>, FetchError>) -> Event {
    match result {
        Ok(questions) => Event::QuestionsLoaded(questions),
        Err(err) => {
            log::error!("no se pudieron cargar las preguntas: {err}");
            Event::QuestionsFailed
        }
    }
}

/// GET único al endpoint. Sin reintentos ni timeout propio.
#[cfg(not(target_arch = "wasm32"))]
pub fn fetch_questions(endpoint: &str) -> Result<Vec<Question>, FetchError> {
    let client = reqwest::blocking::Client::new();
    let response = client.get(endpoint).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response.text()?;
    parse_questions(&body)
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_questions(endpoint: &str) -> Result<Vec<Question>, FetchError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    fn js_err(err: wasm_bindgen::JsValue) -> FetchError {
        FetchError::Js(format!("{err:?}"))
    }

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(endpoint, &opts).map_err(js_err)?;
    let window = web_sys::window().ok_or_else(|| FetchError::Js("No existe window en entorno WASM.".into()))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let response: Response = resp_value.dyn_into().map_err(js_err)?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let text = JsFuture::from(response.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    let text = text
        .as_string()
        .ok_or_else(|| FetchError::Js("response.text() no devolvió string".into()))?;
    parse_questions(&text)
}

/// Lanza la descarga fuera del hilo de la UI. El receptor entrega exactamente
/// un evento: `QuestionsLoaded` o `QuestionsFailed`.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_question_fetch(endpoint: String) -> Receiver<Event> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        log::info!("descargando preguntas de {endpoint}");
        let event = outcome_event(fetch_questions(&endpoint));
        // Si la app ya se cerró nadie escucha; no es un error
        let _ = tx.send(event);
    });
    rx
}

#[cfg(target_arch = "wasm32")]
pub fn spawn_question_fetch(endpoint: String) -> Receiver<Event> {
    let (tx, rx) = mpsc::channel();
    wasm_bindgen_futures::spawn_local(async move {
        log::info!("descargando preguntas de {endpoint}");
        let event = outcome_event(fetch_questions(&endpoint).await);
        let _ = tx.send(event);
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;
    use crate::quiz::QuizState;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::time::Duration;

    // Servidor HTTP de una sola petición que responde `response` tal cual
    fn serve_once(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}/questions")
    }

    fn http_response(status_line: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    const SAMPLE: &str = r#"[
        {
            "question": "Which is the most popular JavaScript framework?",
            "options": ["Angular", "React", "Svelte", "Vue"],
            "correctOption": 1,
            "points": 10,
            "difficulty": "easy",
            "id": "ignored"
        },
        {
            "question": "Which hook is used to manage side effects?",
            "options": ["useState", "useEffect"],
            "correctOption": 1,
            "points": 30,
            "difficulty": "hard"
        }
    ]"#;

    #[test]
    fn parses_camel_case_payload() {
        let questions = parse_questions(SAMPLE).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].correct_option, 1);
        assert_eq!(questions[0].options[1], "React");
        assert_eq!(questions[1].difficulty, Difficulty::Hard);
        assert_eq!(questions[1].points, 30);
    }

    #[test]
    fn rejects_unknown_difficulty() {
        let body = r#"[{"question":"q","options":["a"],"correctOption":0,"points":1,"difficulty":"extreme"}]"#;
        assert!(matches!(parse_questions(body), Err(FetchError::Parse(_))));
    }

    #[test]
    fn rejects_non_array_body() {
        assert!(parse_questions(r#"{"questions": []}"#).is_err());
        assert!(parse_questions("not json").is_err());
    }

    #[test]
    fn outcome_maps_to_events() {
        assert_eq!(outcome_event(Ok(Vec::new())), Event::QuestionsLoaded(Vec::new()));
        let err = parse_questions("nope").unwrap_err();
        assert_eq!(outcome_event(Err(err)), Event::QuestionsFailed);
    }

    #[test]
    fn unreachable_endpoint_yields_failure_event() {
        let rx = spawn_question_fetch("http://127.0.0.1:9/questions".to_string());
        let event = rx.recv_timeout(Duration::from_secs(30)).unwrap();
        assert_eq!(event, Event::QuestionsFailed);
    }

    #[test]
    fn server_error_status_is_a_fetch_error() {
        let endpoint = serve_once(http_response("500 Internal Server Error", ""));
        assert!(matches!(fetch_questions(&endpoint), Err(FetchError::Status(500))));
    }

    #[test]
    fn server_error_status_yields_failure_event() {
        let endpoint = serve_once(http_response("500 Internal Server Error", "boom"));
        let rx = spawn_question_fetch(endpoint);
        let event = rx.recv_timeout(Duration::from_secs(30)).unwrap();
        assert_eq!(event, Event::QuestionsFailed);
    }

    #[test]
    fn successful_response_yields_loaded_event() {
        let endpoint = serve_once(http_response("200 OK", SAMPLE));
        let rx = spawn_question_fetch(endpoint);
        match rx.recv_timeout(Duration::from_secs(30)).unwrap() {
            Event::QuestionsLoaded(questions) => assert_eq!(questions.len(), 2),
            other => panic!("evento inesperado: {other:?}"),
        }
    }

    #[test]
    fn huge_point_values_do_not_overflow_totals() {
        let body = r#"[
            {"question":"a","options":["x","y"],"correctOption":0,"points":3000000000,"difficulty":"hard"},
            {"question":"b","options":["x","y"],"correctOption":1,"points":3000000000,"difficulty":"hard"}
        ]"#;
        let state = QuizState::default().reduce(Event::QuestionsLoaded(parse_questions(body).unwrap()));
        assert_eq!(state.max_possible_points(), u32::MAX);
        assert_eq!(state.percentage(), 0.0);
    }
}
