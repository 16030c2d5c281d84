mod message_count;
mod permitted_channel;
mod registration;
