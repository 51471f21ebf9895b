use common::model::job::JobStatus;
use web_sys::File;

pub enum Msg {
    FilesSelected(Vec<File>),
    DpiPicked(u16),
    Submit,
    Submitted(Result<String, String>),
    StatusReported(JobStatus),
    PollFailed(String),
    DownloadStarted,
    ClearAfterDownload,
    Dismiss,
}
