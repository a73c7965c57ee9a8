mod comments_test;
mod weeks_test;
