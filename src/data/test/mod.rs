mod guild;
mod keeper_role;
mod player;
