use actix_web::dev::ServerHandle;
use actix_web::{web, App, HttpServer};
use oapi_runtime::{Client, RuntimeError, UreqExecutor};
use petstore_web::client::{AddPetResponse, DeletePetResponse, FindPetByIdResponse, FindPetsResponse};
use petstore_web::models::{FindPetsParams, NewPet, Pet};
use petstore_web::{configure, PetStore, PetstoreClient};
use pretty_assertions::assert_eq;
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use ureq::Agent;

struct RunningServer {
    base: String,
    handle: ServerHandle,
    thread: thread::JoinHandle<()>,
}

impl RunningServer {
    fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}/", listener.local_addr().unwrap());
        let (tx, rx) = mpsc::channel();

        let thread = thread::spawn(move || {
            actix_web::rt::System::new().block_on(async move {
                let store = web::Data::new(PetStore::new());
                let server = HttpServer::new(move || {
                    App::new()
                        .app_data(store.clone())
                        .configure(configure::<PetStore>)
                })
                .workers(1)
                .listen(listener)
                .unwrap()
                .run();
                tx.send(server.handle()).unwrap();
                server.await.unwrap();
            })
        });

        let handle = rx.recv().unwrap();
        Self {
            base,
            handle,
            thread,
        }
    }

    fn stop(self) {
        actix_web::rt::System::new().block_on(self.handle.stop(true));
        self.thread.join().unwrap();
    }
}

fn pets(client: &PetstoreClient<UreqExecutor>, tags: Option<&[&str]>) -> Vec<Pet> {
    let params = FindPetsParams {
        tags: tags.map(|t| t.iter().map(|s| s.to_string()).collect()),
        limit: None,
    };
    let response = client.find_pets(&params).unwrap();
    assert_eq!(response.status, 200);
    match response.into_payload() {
        Some(FindPetsResponse::Ok(list)) => list,
        other => panic!("unexpected findPets payload: {other:?}"),
    }
}

fn add(client: &PetstoreClient<UreqExecutor>, name: &str, tag: &str) -> Pet {
    let new_pet = NewPet {
        name: name.into(),
        tag: Some(tag.into()),
    };
    let response = client.add_pet(&new_pet).unwrap();
    assert_eq!(response.status, 201);
    match response.into_payload() {
        Some(AddPetResponse::Created(pet)) => {
            assert_eq!(pet.name, new_pet.name);
            assert_eq!(pet.tag, new_pet.tag);
            pet
        }
        other => panic!("unexpected addPet payload: {other:?}"),
    }
}

#[test]
fn test_pet_store_round_trip() {
    let server = RunningServer::start();
    let client = PetstoreClient::new(Client::new(&server.base, UreqExecutor::new()).unwrap());

    let spot = add(&client, "Spot", "TagOfSpot");
    match client.find_pet_by_id(spot.id).unwrap().into_payload() {
        Some(FindPetByIdResponse::Ok(found)) => assert_eq!(found, spot),
        other => panic!("unexpected findPetById payload: {other:?}"),
    }

    let missing = client.find_pet_by_id(27179095781).unwrap();
    assert_eq!(missing.status, 404);
    match missing.into_payload() {
        Some(FindPetByIdResponse::Default(err)) => assert_eq!(err.code, 404),
        other => panic!("unexpected findPetById payload: {other:?}"),
    }

    let fido = add(&client, "Fido", "TagOfFido");

    assert_eq!(pets(&client, None).len(), 2);
    assert_eq!(pets(&client, Some(&["TagOfFido"])), vec![fido.clone()]);
    assert_eq!(pets(&client, Some(&["NotExists"])), vec![]);

    let gone = client.delete_pet(7).unwrap();
    assert_eq!(gone.status, 404);
    match gone.into_payload() {
        Some(DeletePetResponse::Default(err)) => assert_eq!(err.code, 404),
        other => panic!("unexpected deletePet payload: {other:?}"),
    }

    for id in [spot.id, fido.id] {
        let deleted = client.delete_pet(id).unwrap();
        assert_eq!(deleted.status, 204);
        assert_eq!(deleted.into_payload(), Some(DeletePetResponse::NoContent));
    }
    assert_eq!(pets(&client, None), vec![]);

    server.stop();
}

#[test]
fn test_malformed_path_reaches_client_as_default() {
    let server = RunningServer::start();
    let client = Client::new(&server.base, UreqExecutor::new()).unwrap();

    let response = client
        .send(
            oapi_runtime::RequestBuilder::new(oapi_runtime::Method::Get, "/pets/not-a-number"),
            &petstore_web::client::find_pet_by_id_rules(),
        )
        .unwrap();
    assert_eq!(response.status, 400);
    match response.into_payload() {
        Some(FindPetByIdResponse::Default(err)) => {
            assert_eq!(err.code, 400);
            assert!(err.message.contains("'id'"), "{}", err.message);
        }
        other => panic!("unexpected payload: {other:?}"),
    }

    server.stop();
}

#[test]
fn test_executor_over_caller_agent() {
    let server = RunningServer::start();

    let lenient = Agent::new_with_config(
        Agent::config_builder()
            .http_status_as_error(false)
            .user_agent("petstore-tests")
            .build(),
    );
    let client = PetstoreClient::new(Client::new(&server.base, UreqExecutor::with_agent(lenient)).unwrap());
    let missing = client.find_pet_by_id(1).unwrap();
    assert_eq!(missing.status, 404);

    // An agent that turns error statuses into errors surfaces them as transport failures.
    let strict = Agent::new_with_config(Agent::config_builder().build());
    let client = PetstoreClient::new(Client::new(&server.base, UreqExecutor::with_agent(strict)).unwrap());
    match client.find_pet_by_id(1).unwrap_err() {
        RuntimeError::Transport(source) => assert!(
            matches!(source.downcast_ref::<ureq::Error>(), Some(ureq::Error::StatusCode(404))),
            "{source:?}"
        ),
        other => panic!("unexpected error: {other:?}"),
    }

    server.stop();
}
