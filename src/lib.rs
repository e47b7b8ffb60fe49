pub mod application;
pub mod connector;
pub mod domain;

pub use application::{
    AnswerQuestionUseCase, ApodService, ChatClient, FetchApodUseCase,
};

pub use connector::{
    build_router, serve, ApiError, Container, ContainerConfig, MockChatClient, NasaApodClient,
    OpenAiChatClient, QueryRequest, WelcomeResponse,
};

pub use domain::{Answer, DomainError, Question};
