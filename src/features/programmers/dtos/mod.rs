mod programmer_dto;

pub use programmer_dto::BestProgrammerDto;
