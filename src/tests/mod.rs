mod mock_trivia_repository;
mod unit_config;
