use twofold::lesson::{self, Lesson};

fn main() -> Result<(), twofold::Error> {
    lesson::init_tracing();
    Lesson::GenericDouble.run()
}
