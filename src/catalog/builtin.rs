//! Events known out of the box
//!
//! A representative slice of query profile events: counters, byte volumes and
//! timers in each of the three time units.

use crate::types::ValueType;

pub(super) const EVENTS: &[(&str, ValueType, &str)] = &[
    (
        "Query",
        ValueType::Number,
        "Number of queries to be interpreted and potentially executed.",
    ),
    (
        "SelectQuery",
        ValueType::Number,
        "Same as Query, but only for SELECT queries.",
    ),
    (
        "InsertQuery",
        ValueType::Number,
        "Same as Query, but only for INSERT queries.",
    ),
    ("FileOpen", ValueType::Number, "Number of files opened."),
    (
        "Seek",
        ValueType::Number,
        "Number of times the 'lseek' function was called.",
    ),
    (
        "ReadBufferFromFileDescriptorRead",
        ValueType::Number,
        "Number of reads (read/pread) from a file descriptor. Does not include sockets.",
    ),
    (
        "ReadBufferFromFileDescriptorReadBytes",
        ValueType::Bytes,
        "Number of bytes read from file descriptors. If the file is compressed, this will show the compressed data size.",
    ),
    (
        "WriteBufferFromFileDescriptorWriteBytes",
        ValueType::Bytes,
        "Number of bytes written to file descriptors. If the file is compressed, this will show compressed data size.",
    ),
    (
        "NetworkReceiveBytes",
        ValueType::Bytes,
        "Total number of bytes received from network.",
    ),
    (
        "NetworkSendBytes",
        ValueType::Bytes,
        "Total number of bytes sent to network.",
    ),
    (
        "SelectedParts",
        ValueType::Number,
        "Number of data parts selected to read from a MergeTree table.",
    ),
    (
        "SelectedRanges",
        ValueType::Number,
        "Number of (non-adjacent) ranges in all data parts selected to read from a MergeTree table.",
    ),
    (
        "SelectedMarks",
        ValueType::Number,
        "Number of marks (index granules) selected to read from a MergeTree table.",
    ),
    (
        "SelectedRows",
        ValueType::Number,
        "Number of rows SELECTed from all tables.",
    ),
    (
        "SelectedBytes",
        ValueType::Bytes,
        "Number of bytes (uncompressed; for columns as they stored in memory) SELECTed from all tables.",
    ),
    (
        "InsertedRows",
        ValueType::Number,
        "Number of rows INSERTed to all tables.",
    ),
    (
        "InsertedBytes",
        ValueType::Bytes,
        "Number of bytes (uncompressed; for columns as they stored in memory) INSERTed to all tables.",
    ),
    (
        "MarkCacheHits",
        ValueType::Number,
        "Number of times an entry has been found in the mark cache, so we didn't have to load a mark file.",
    ),
    (
        "MarkCacheMisses",
        ValueType::Number,
        "Number of times an entry has not been found in the mark cache, so we had to load a mark file in memory.",
    ),
    (
        "CompressedReadBufferBlocks",
        ValueType::Number,
        "Number of compressed blocks (the blocks of data that are compressed independent of each other) read from compressed sources.",
    ),
    (
        "CompressedReadBufferBytes",
        ValueType::Bytes,
        "Number of uncompressed bytes read from compressed sources.",
    ),
    (
        "DiskReadElapsedMicroseconds",
        ValueType::Microseconds,
        "Total time spent waiting for read syscall. This include reads from page cache.",
    ),
    (
        "DiskWriteElapsedMicroseconds",
        ValueType::Microseconds,
        "Total time spent waiting for write syscall. This include writes to page cache.",
    ),
    (
        "NetworkReceiveElapsedMicroseconds",
        ValueType::Microseconds,
        "Total time spent waiting for data to receive or receiving data from network.",
    ),
    (
        "NetworkSendElapsedMicroseconds",
        ValueType::Microseconds,
        "Total time spent waiting for data to send to network or sending data to network.",
    ),
    (
        "RealTimeMicroseconds",
        ValueType::Microseconds,
        "Total (wall clock) time spent in processing threads.",
    ),
    (
        "UserTimeMicroseconds",
        ValueType::Microseconds,
        "Total time spent in processing threads executing CPU instructions in user mode.",
    ),
    (
        "SystemTimeMicroseconds",
        ValueType::Microseconds,
        "Total time spent in processing threads executing CPU instructions in OS kernel mode.",
    ),
    (
        "OSCPUWaitMicroseconds",
        ValueType::Microseconds,
        "Total time a thread was ready for execution but waiting to be scheduled by OS.",
    ),
    (
        "OSReadBytes",
        ValueType::Bytes,
        "Number of bytes read from disks or block devices. Doesn't include bytes read from page cache.",
    ),
    (
        "OSWriteBytes",
        ValueType::Bytes,
        "Number of bytes written to disks or block devices. Doesn't include bytes that are in page cache dirty pages.",
    ),
    (
        "ContextLock",
        ValueType::Number,
        "Number of times the lock of Context was acquired or tried to acquire.",
    ),
    (
        "ContextLockWaitMicroseconds",
        ValueType::Microseconds,
        "Context lock wait time in microseconds.",
    ),
    (
        "MergedRows",
        ValueType::Number,
        "Rows read for background merges. This is the number of rows before merge.",
    ),
    (
        "MergedUncompressedBytes",
        ValueType::Bytes,
        "Uncompressed bytes (for columns as they stored in memory) that was read for background merges.",
    ),
    (
        "MergesTimeMilliseconds",
        ValueType::Milliseconds,
        "Total time spent for background merges.",
    ),
    (
        "QueryProfilerRuns",
        ValueType::Number,
        "Number of times QueryProfiler had been run.",
    ),
    (
        "ThreadpoolReaderTaskMicroseconds",
        ValueType::Microseconds,
        "Time spent getting the data in asynchronous reading.",
    ),
    (
        "SchedulerIOReadWaitMicroseconds",
        ValueType::Microseconds,
        "Total time a query was waiting on resource requests for IO reads.",
    ),
    (
        "OSCPUVirtualTimeMicroseconds",
        ValueType::Microseconds,
        "CPU time spent seen by OS. Does not include involuntary waits due to virtualization.",
    ),
    (
        "PerfCPUClockNanoseconds",
        ValueType::Nanoseconds,
        "CPU clock time as measured by the kernel perf subsystem.",
    ),
    (
        "PerfTaskClockNanoseconds",
        ValueType::Nanoseconds,
        "Task clock time as measured by the kernel perf subsystem.",
    ),
    (
        "ZooKeeperWaitMicroseconds",
        ValueType::Microseconds,
        "Number of microseconds spent waiting for responses from ZooKeeper after creating a request.",
    ),
    (
        "GlobalThreadPoolLockWaitMicroseconds",
        ValueType::Microseconds,
        "Total time threads have spent waiting for locks in the global thread pool.",
    ),
    (
        "S3ReadMicroseconds",
        ValueType::Microseconds,
        "Time of GET and HEAD requests to S3 storage.",
    ),
    (
        "S3ReadRequestsCount",
        ValueType::Number,
        "Number of GET and HEAD requests to S3 storage.",
    ),
    (
        "ReadBackoff",
        ValueType::Number,
        "Number of times the number of query processing threads was lowered due to slow reads.",
    ),
    (
        "DistributedConnectionFailTry",
        ValueType::Number,
        "Total count when distributed connection fails with retry.",
    ),
    (
        "ExternalSortWritePart",
        ValueType::Number,
        "Number of times a temporary file was written to disk for sorting in external memory.",
    ),
    (
        "ExternalProcessingCompressedBytesTotal",
        ValueType::Bytes,
        "Number of compressed bytes written by external processing (sorting/aggregating/joining).",
    ),
    (
        "WaitMarksLoadMicroseconds",
        ValueType::Microseconds,
        "Time spent loading marks.",
    ),
    (
        "MemoryAllocatorPurgeTimeMicroseconds",
        ValueType::Microseconds,
        "Total time spent for purging memory.",
    ),
    (
        "SleepFunctionMilliseconds",
        ValueType::Milliseconds,
        "Time set to sleep in a sleep function (sleep, sleepEachRow).",
    ),
];
